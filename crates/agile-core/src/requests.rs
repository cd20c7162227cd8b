//! Request payloads sent to the backend.
//!
//! Item updates are full replacements on the backend: every field is sent and
//! a `null` `sprintId` unassigns the item. Partial edits are therefore expressed
//! as a [`BacklogEdit`] applied over the current item, then converted with
//! [`BacklogUpdateRequest::from_item`].

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{BacklogItem, Sprint};
use crate::enums::{ItemStatus, Priority};
use crate::errors::CoreError;

/// Body of `POST /projects/{p}/backlogs`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BacklogCreateRequest {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub sprint_id: Option<i64>,
    pub story_id: Option<i64>,
    pub member_id: Option<i64>,
}

impl BacklogCreateRequest {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            sprint_id: None,
            story_id: None,
            member_id: None,
        }
    }

    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if the title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "backlog item title must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Body of `PUT /projects/{p}/backlogs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BacklogUpdateRequest {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: ItemStatus,
    pub sprint_id: Option<i64>,
    pub story_id: Option<i64>,
    pub member_id: Option<i64>,
}

impl BacklogUpdateRequest {
    /// Mirror every mutable field of `item`.
    #[must_use]
    pub fn from_item(item: &BacklogItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            priority: item.priority,
            status: item.status,
            sprint_id: item.sprint_id,
            story_id: item.story_id,
            member_id: item.member_id,
        }
    }
}

/// A partial edit of a backlog item.
///
/// Nullable fields use `Option<Option<_>>`: the outer `None` leaves the field
/// alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<Option<i64>>,
}

impl BacklogEdit {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The item as it looks once this edit is applied.
    #[must_use]
    pub fn apply_to(&self, item: &BacklogItem) -> BacklogItem {
        let mut next = item.clone();
        if let Some(title) = &self.title {
            next.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            next.description.clone_from(description);
        }
        if let Some(priority) = self.priority {
            next.priority = priority;
        }
        if let Some(status) = self.status {
            next.status = status;
        }
        if let Some(sprint_id) = self.sprint_id {
            next.sprint_id = sprint_id;
        }
        if let Some(story_id) = self.story_id {
            next.story_id = story_id;
        }
        if let Some(member_id) = self.member_id {
            next.member_id = member_id;
        }
        next
    }
}

pub struct BacklogEditBuilder(BacklogEdit);

impl Default for BacklogEditBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BacklogEditBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(BacklogEdit::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: ItemStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn sprint_id(mut self, sprint_id: Option<i64>) -> Self {
        self.0.sprint_id = Some(sprint_id);
        self
    }

    #[must_use]
    pub const fn story_id(mut self, story_id: Option<i64>) -> Self {
        self.0.story_id = Some(story_id);
        self
    }

    #[must_use]
    pub const fn member_id(mut self, member_id: Option<i64>) -> Self {
        self.0.member_id = Some(member_id);
        self
    }

    #[must_use]
    pub fn build(self) -> BacklogEdit {
        self.0
    }
}

/// Body of `PUT /projects/{p}/sprints/{s}` and `PUT /projects/{p}/sprints/{s}/start`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SprintForm {
    pub title: String,
    pub goal: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl SprintForm {
    /// Prefill a form from the sprint's current values.
    #[must_use]
    pub fn from_sprint(sprint: &Sprint) -> Self {
        Self {
            title: sprint.title.clone(),
            goal: sprint.goal.clone().unwrap_or_default(),
            start_date: sprint.start_date,
            end_date: sprint.end_date,
        }
    }

    /// Title, goal and end date are required; the end date may not precede
    /// the start date.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::InvalidArgument("sprint title is required".into()));
        }
        if self.goal.trim().is_empty() {
            return Err(CoreError::InvalidArgument("sprint goal is required".into()));
        }
        let Some(end_date) = self.end_date else {
            return Err(CoreError::InvalidArgument("sprint end date is required".into()));
        };
        if let Some(start_date) = self.start_date
            && end_date < start_date
        {
            return Err(CoreError::InvalidArgument(format!(
                "sprint end date {end_date} precedes start date {start_date}"
            )));
        }
        Ok(())
    }
}

/// Body of story create/update requests.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StoryRequest {
    pub title: String,
    pub description: String,
}

impl StoryRequest {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if the title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::InvalidArgument("story title must not be empty".into()));
        }
        Ok(())
    }
}
