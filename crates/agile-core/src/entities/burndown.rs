use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Work left at the end of one completed sprint.
///
/// The backend returns one entry per completed sprint of a project, which is
/// what the burndown chart plots.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BurndownEntry {
    #[serde(alias = "id")]
    pub sprint_id: i64,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    #[schemars(with = "String")]
    pub title: String,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed_count: u32,
    #[serde(default)]
    pub remaining_count: u32,
}

impl BurndownEntry {
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.completed_count + self.remaining_count
    }
}

/// Running remaining-work series, in sprint order.
///
/// Starts from the total work across every entry and subtracts each sprint's
/// completed count, yielding `(sprint_id, remaining)` after each sprint.
#[must_use]
pub fn burndown_series(entries: &[BurndownEntry]) -> Vec<(i64, u32)> {
    let mut remaining: u32 = entries.iter().map(|e| e.completed_count).sum::<u32>()
        + entries.last().map_or(0, |e| e.remaining_count);
    entries
        .iter()
        .map(|entry| {
            remaining = remaining.saturating_sub(entry.completed_count);
            (entry.sprint_id, remaining)
        })
        .collect()
}
