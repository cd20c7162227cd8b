use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SprintPhase;
use crate::errors::CoreError;

/// A time-boxed container of backlog items.
///
/// The sprint's item set is never stored here; it is computed from the items'
/// `sprint_id` (see [`crate::model::items_for_sprint`]).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    #[serde(alias = "sprintId")]
    pub id: i64,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    #[schemars(with = "String")]
    pub title: String,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub is_activate: bool,
    #[serde(default)]
    pub project_id: i64,
}

impl Sprint {
    /// A freshly created sprint: planned, no dates, no goal.
    #[must_use]
    pub fn planned(id: i64, project_id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            goal: None,
            start_date: None,
            end_date: None,
            is_done: false,
            is_activate: false,
            project_id,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> SprintPhase {
        SprintPhase::from_flags(self.is_activate, self.is_done)
    }

    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] unless the sprint's current
    /// phase allows moving to `next`.
    pub fn ensure_transition(&self, next: SprintPhase) -> Result<(), CoreError> {
        let current = self.phase();
        if current.can_transition_to(next) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                entity_type: "sprint".into(),
                id: self.id,
                from: current.to_string(),
                to: next.to_string(),
            })
        }
    }

    /// Title to render; untitled sprints fall back to `Sprint {id}`.
    #[must_use]
    pub fn display_title(&self) -> String {
        if self.title.trim().is_empty() {
            format!("Sprint {}", self.id)
        } else {
            self.title.clone()
        }
    }
}
