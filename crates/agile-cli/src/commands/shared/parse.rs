use agile_core::enums::{ItemStatus, Priority};
use agile_core::model::normalize_status;

/// Parse `high` / `medium` / `low` (any case).
pub fn parse_priority(raw: &str) -> anyhow::Result<Priority> {
    Priority::parse(raw).map_err(|error| anyhow::anyhow!("invalid priority '{raw}': {error}"))
}

/// Parse a status name (`todo`, `in-progress`, `IN_PROGRESS`) or a board
/// label (`To Do`, `In Progress`, `Done`).
pub fn parse_status(raw: &str) -> anyhow::Result<ItemStatus> {
    ItemStatus::parse(raw)
        .or_else(|_| normalize_status(raw.trim()))
        .map_err(|error| anyhow::anyhow!("invalid status '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_priority_case_insensitively() {
        assert_eq!(parse_priority("HIGH").unwrap(), Priority::High);
        assert_eq!(parse_priority("low").unwrap(), Priority::Low);
    }

    #[test]
    fn parses_status_names_and_labels() {
        assert_eq!(parse_status("in-progress").unwrap(), ItemStatus::InProgress);
        assert_eq!(parse_status("DONE").unwrap(), ItemStatus::Done);
        assert_eq!(parse_status("To Do").unwrap(), ItemStatus::Todo);
    }

    #[test]
    fn errors_on_invalid_status() {
        let err = parse_status("blocked").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'blocked'"));
    }
}
