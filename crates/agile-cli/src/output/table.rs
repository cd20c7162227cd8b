#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let cell = format_cell(&truncated, *width, numeric);
                if options.color {
                    colorize(&cell, &truncated)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider.trim_end().to_string());
    lines.extend(row_lines);
    lines.join("\n")
}

const MIN_WIDTH: usize = 2;

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Color a padded cell by its content: statuses, sprint phases and priority
/// short labels.
fn colorize(cell: &str, content: &str) -> String {
    let code = match content.to_ascii_lowercase().as_str() {
        "done" | "completed" | "l" => Some("32"),
        "in progress" | "active" | "m" => Some("33"),
        "h" => Some("31"),
        "to do" | "planned" => Some("36"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{cell}\u{1b}[0m"),
        None => cell.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn numeric_cells_are_right_aligned() {
        let rows = vec![vec!["7".to_string(), "x".to_string()]];
        let table = render_entity_table(&["id", "title"], &rows, PLAIN);
        let row = table.lines().nth(2).unwrap();
        assert!(row.starts_with(" 7"));
    }

    #[test]
    fn wide_columns_are_truncated_to_fit() {
        let rows = vec![vec!["1".to_string(), "x".repeat(80)]];
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let table = render_entity_table(&["id", "title"], &rows, options);
        for line in table.lines() {
            assert!(line.chars().count() <= 40, "line too wide: {line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn colors_wrap_known_values() {
        let rows = vec![vec!["Done".to_string()]];
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_entity_table(&["status"], &rows, options);
        assert!(table.lines().nth(2).unwrap().starts_with("\u{1b}[32m"));
    }
}
