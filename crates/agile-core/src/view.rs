//! Board views derived from a snapshot.
//!
//! A [`BoardView`] is what the backlog-and-sprint page renders: one pane per
//! sprint still on the board plus the unassigned backlog pane. It is rebuilt
//! from scratch on every snapshot.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{BacklogItem, Sprint};
use crate::enums::SprintPhase;
use crate::model::{filter_by_assignee, items_for_sprint, unassigned_items};

/// Which items the board shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewFilter {
    /// Only show items assigned to this member. `None` shows everything.
    pub assignee: Option<i64>,
}

impl ViewFilter {
    #[must_use]
    pub const fn all() -> Self {
        Self { assignee: None }
    }

    /// "My tasks only" for `member_id`.
    #[must_use]
    pub const fn mine(member_id: i64) -> Self {
        Self {
            assignee: Some(member_id),
        }
    }

    #[must_use]
    pub fn apply(&self, items: &[BacklogItem]) -> Vec<BacklogItem> {
        match self.assignee {
            Some(member_id) => filter_by_assignee(items, member_id, true),
            None => items.to_vec(),
        }
    }
}

/// One sprint and the items it currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SprintPane {
    pub sprint: Sprint,
    pub phase: SprintPhase,
    pub items: Vec<BacklogItem>,
}

/// Everything the backlog-and-sprint page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub filter: ViewFilter,
    pub sprints: Vec<SprintPane>,
    pub backlog: Vec<BacklogItem>,
}

impl BoardView {
    /// Filter by assignee first, then partition into sprint panes (sprint list
    /// order, completed sprints dropped) and the unassigned backlog.
    #[must_use]
    pub fn derive(items: &[BacklogItem], sprints: &[Sprint], filter: ViewFilter) -> Self {
        let visible = filter.apply(items);
        let panes = sprints
            .iter()
            .filter(|sprint| sprint.phase().is_on_board())
            .map(|sprint| SprintPane {
                sprint: sprint.clone(),
                phase: sprint.phase(),
                items: items_for_sprint(&visible, sprint.id),
            })
            .collect();

        Self {
            filter,
            sprints: panes,
            backlog: unassigned_items(&visible),
        }
    }

    /// The pane for `sprint_id`, if that sprint is on the board.
    #[must_use]
    pub fn pane(&self, sprint_id: i64) -> Option<&SprintPane> {
        self.sprints.iter().find(|pane| pane.sprint.id == sprint_id)
    }

    /// Number of items rendered across all panes.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.backlog.len() + self.sprints.iter().map(|pane| pane.items.len()).sum::<usize>()
    }
}
