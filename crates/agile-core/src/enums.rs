//! Priority, status and sprint lifecycle enums.
//!
//! `Priority` and `ItemStatus` travel over the wire and serialize as
//! `SCREAMING_SNAKE_CASE` (`HIGH`, `IN_PROGRESS`) to match the backend.
//! `SprintPhase` is derived locally from a sprint's flags and uses
//! `snake_case`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of a backlog item.
///
/// ```text
/// high → medium → low → high   (cycle order)
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// The priority that follows `self` in the three-step rotation.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::High,
        }
    }

    /// Single-letter badge shown next to an item.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::High => "H",
            Self::Medium => "M",
            Self::Low => "L",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Parse a wire value, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] for anything other than
    /// `high`, `medium` or `low`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| CoreError::InvalidArgument(format!("unknown priority '{raw}'")))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ItemStatus
// ---------------------------------------------------------------------------

/// Work status of a backlog item.
///
/// Any status may be set from any other; the board does not restrict item
/// status changes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl ItemStatus {
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Display label used by the status dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Map a display label back to its status.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if `label` is not exactly one of
    /// `"To Do"`, `"In Progress"` or `"Done"`.
    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|s| s.label() == label)
            .ok_or_else(|| CoreError::InvalidArgument(format!("unknown status label '{label}'")))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Parse a wire value (`todo`, `in_progress`, `in-progress`), case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] for unknown values.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let normalized = raw.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| CoreError::InvalidArgument(format!("unknown status '{raw}'")))
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SprintPhase
// ---------------------------------------------------------------------------

/// Lifecycle phase of a sprint, derived from its `isActivate` / `isDone` flags.
///
/// ```text
/// planned → active → completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SprintPhase {
    Planned,
    Active,
    Completed,
}

impl SprintPhase {
    /// Derive the phase from the backend flags. `is_done` wins over `is_activate`.
    #[must_use]
    pub const fn from_flags(is_activate: bool, is_done: bool) -> Self {
        if is_done {
            Self::Completed
        } else if is_activate {
            Self::Active
        } else {
            Self::Planned
        }
    }

    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Planned => &[Self::Active],
            Self::Active => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Completed sprints are hidden from the board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        !matches!(self, Self::Completed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for SprintPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
