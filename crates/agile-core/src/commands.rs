//! Board commands.
//!
//! Drag-and-drop drops, dropdown picks and button clicks are expressed as
//! plain command values. A single dispatcher (see `agile-client`) turns each
//! one into a backend request and then refetches the snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::ItemStatus;
use crate::requests::{BacklogCreateRequest, BacklogEdit, SprintForm};

/// Drop an item onto a sprint pane, or back onto the backlog (`target_sprint_id = None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveToSprintCommand {
    pub item_id: i64,
    pub target_sprint_id: Option<i64>,
}

impl MoveToSprintCommand {
    #[must_use]
    pub const fn to_sprint(item_id: i64, sprint_id: i64) -> Self {
        Self {
            item_id,
            target_sprint_id: Some(sprint_id),
        }
    }

    #[must_use]
    pub const fn to_backlog(item_id: i64) -> Self {
        Self {
            item_id,
            target_sprint_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum BoardCommand {
    MoveToSprint(MoveToSprintCommand),
    ChangeStatus { item_id: i64, status: ItemStatus },
    CyclePriority { item_id: i64 },
    UpdateItem { item_id: i64, edit: BacklogEdit },
    CreateItem(BacklogCreateRequest),
    DeleteItem { item_id: i64 },
    CreateSprint,
    UpdateSprint { sprint_id: i64, form: SprintForm },
    StartSprint { sprint_id: i64, form: SprintForm },
    CompleteSprint { sprint_id: i64 },
    DeleteSprint { sprint_id: i64 },
}

impl BoardCommand {
    /// Short name used in log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MoveToSprint(_) => "move_to_sprint",
            Self::ChangeStatus { .. } => "change_status",
            Self::CyclePriority { .. } => "cycle_priority",
            Self::UpdateItem { .. } => "update_item",
            Self::CreateItem(_) => "create_item",
            Self::DeleteItem { .. } => "delete_item",
            Self::CreateSprint => "create_sprint",
            Self::UpdateSprint { .. } => "update_sprint",
            Self::StartSprint { .. } => "start_sprint",
            Self::CompleteSprint { .. } => "complete_sprint",
            Self::DeleteSprint { .. } => "delete_sprint",
        }
    }
}

impl From<MoveToSprintCommand> for BoardCommand {
    fn from(command: MoveToSprintCommand) -> Self {
        Self::MoveToSprint(command)
    }
}
