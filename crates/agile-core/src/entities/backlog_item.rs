use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ItemStatus, Priority};

/// A unit of work on the board, optionally linked to a sprint, assignee and story.
///
/// `sprint_id == None` places the item in the unassigned backlog. An item
/// belongs to at most one sprint because membership is a single field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BacklogItem {
    #[serde(rename = "backlogId", alias = "id")]
    pub id: i64,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    #[schemars(with = "String")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    #[schemars(with = "String")]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub member_id: Option<i64>,
    #[serde(default)]
    pub sprint_id: Option<i64>,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub story_id: Option<i64>,
}

/// Sprint membership of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    Unassigned,
    AssignedTo(i64),
}

impl BacklogItem {
    /// A fresh item in the unassigned backlog with default priority and status.
    #[must_use]
    pub fn new(id: i64, project_id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            status: ItemStatus::default(),
            member_id: None,
            sprint_id: None,
            project_id,
            story_id: None,
        }
    }

    #[must_use]
    pub const fn membership(&self) -> Membership {
        match self.sprint_id {
            Some(sprint_id) => Membership::AssignedTo(sprint_id),
            None => Membership::Unassigned,
        }
    }

    #[must_use]
    pub const fn is_unassigned(&self) -> bool {
        self.sprint_id.is_none()
    }

    #[must_use]
    pub fn is_in_sprint(&self, sprint_id: i64) -> bool {
        self.sprint_id == Some(sprint_id)
    }

    #[must_use]
    pub fn is_assigned_to(&self, member_id: i64) -> bool {
        self.member_id == Some(member_id)
    }
}
