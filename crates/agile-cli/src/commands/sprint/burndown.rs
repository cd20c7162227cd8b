use agile_core::entities::{BurndownEntry, burndown_series};
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_rows;

pub const BURNDOWN_HEADERS: [&str; 5] = ["sprint", "title", "end", "done", "remaining"];

/// One row per completed sprint; `remaining` is the running total left
/// after that sprint.
pub fn rows(entries: &[BurndownEntry]) -> Vec<Vec<String>> {
    entries
        .iter()
        .zip(burndown_series(entries))
        .map(|(entry, (_, remaining))| {
            vec![
                entry.sprint_id.to_string(),
                if entry.title.trim().is_empty() {
                    format!("Sprint {}", entry.sprint_id)
                } else {
                    entry.title.clone()
                },
                entry
                    .end_date
                    .map_or_else(|| String::from("-"), |date| date.to_string()),
                entry.completed_count.to_string(),
                remaining.to_string(),
            ]
        })
        .collect()
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project_id = ctx.project_id()?;
    let entries = ctx
        .client
        .burndown(project_id)
        .await
        .with_context(|| format!("failed to fetch burndown of project {project_id}"))?;
    output_rows(&entries, &BURNDOWN_HEADERS, &rows(&entries), flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rows_carry_running_remaining() {
        let entries = vec![
            BurndownEntry {
                sprint_id: 4,
                title: String::new(),
                end_date: None,
                completed_count: 6,
                remaining_count: 9,
            },
            BurndownEntry {
                sprint_id: 5,
                title: "Sprint 2".into(),
                end_date: chrono::NaiveDate::from_ymd_opt(2024, 11, 14),
                completed_count: 5,
                remaining_count: 4,
            },
        ];
        assert_eq!(
            rows(&entries),
            vec![
                vec!["4", "Sprint 4", "-", "6", "9"],
                vec!["5", "Sprint 2", "2024-11-14", "5", "4"],
            ]
        );
    }
}
