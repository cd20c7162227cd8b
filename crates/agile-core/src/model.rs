//! Backlog/sprint membership model.
//!
//! Every function here is a pure, single-pass operation over a borrowed
//! snapshot. Derived views keep the input order (insertion order is render
//! order). Nothing is indexed; each view is recomputed by a linear filter.
//!
//! `move_to_sprint` only describes the target state. The backend remains the
//! system of record, so callers must reconcile by refetching after the
//! corresponding update request succeeds.

use crate::entities::{BacklogItem, Sprint};
use crate::enums::{ItemStatus, Priority};
use crate::errors::CoreError;

/// Items that belong to no sprint.
#[must_use]
pub fn unassigned_items(items: &[BacklogItem]) -> Vec<BacklogItem> {
    items
        .iter()
        .filter(|item| item.is_unassigned())
        .cloned()
        .collect()
}

/// Items whose `sprint_id` equals `sprint_id`.
#[must_use]
pub fn items_for_sprint(items: &[BacklogItem], sprint_id: i64) -> Vec<BacklogItem> {
    items
        .iter()
        .filter(|item| item.is_in_sprint(sprint_id))
        .cloned()
        .collect()
}

/// Restrict `items` to those assigned to `member_id`, or return them unchanged
/// when `enabled` is false.
///
/// Apply this before partitioning so "my tasks only" holds across the backlog
/// pane and every sprint pane.
#[must_use]
pub fn filter_by_assignee(items: &[BacklogItem], member_id: i64, enabled: bool) -> Vec<BacklogItem> {
    if !enabled {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.is_assigned_to(member_id))
        .cloned()
        .collect()
}

/// Return a copy of `items` with the item `item_id` moved to `target`
/// (`None` moves it back to the unassigned backlog).
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] if no item has id `item_id`. `items` is
/// never modified.
pub fn move_to_sprint(
    items: &[BacklogItem],
    item_id: i64,
    target: Option<i64>,
) -> Result<Vec<BacklogItem>, CoreError> {
    update_item(items, item_id, |item| item.sprint_id = target)
}

/// Return a copy of `items` with the status of `item_id` replaced.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] if no item has id `item_id`.
pub fn set_status(
    items: &[BacklogItem],
    item_id: i64,
    status: ItemStatus,
) -> Result<Vec<BacklogItem>, CoreError> {
    update_item(items, item_id, |item| item.status = status)
}

/// Return a copy of `items` with the priority of `item_id` advanced one step.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] if no item has id `item_id`.
pub fn cycle_item_priority(
    items: &[BacklogItem],
    item_id: i64,
) -> Result<Vec<BacklogItem>, CoreError> {
    update_item(items, item_id, |item| item.priority = cycle_priority(item.priority))
}

/// `HIGH → MEDIUM → LOW → HIGH`.
#[must_use]
pub const fn cycle_priority(priority: Priority) -> Priority {
    priority.cycled()
}

/// Map a display label (`"To Do"`, `"In Progress"`, `"Done"`) to its status.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] for any other label.
pub fn normalize_status(label: &str) -> Result<ItemStatus, CoreError> {
    ItemStatus::from_label(label)
}

/// Map a status to its display label.
#[must_use]
pub const fn denormalize_status(status: ItemStatus) -> &'static str {
    status.label()
}

/// Look up an item by id.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] if no item has id `item_id`.
pub fn find_item(items: &[BacklogItem], item_id: i64) -> Result<&BacklogItem, CoreError> {
    items
        .iter()
        .find(|item| item.id == item_id)
        .ok_or_else(|| CoreError::not_found("backlog item", item_id))
}

/// Look up a sprint by id.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] if no sprint has id `sprint_id`.
pub fn find_sprint(sprints: &[Sprint], sprint_id: i64) -> Result<&Sprint, CoreError> {
    sprints
        .iter()
        .find(|sprint| sprint.id == sprint_id)
        .ok_or_else(|| CoreError::not_found("sprint", sprint_id))
}

/// Derived status of a story: `Done` once it has at least one item and all of
/// its items are done, `InProgress` otherwise.
#[must_use]
pub fn derive_story_status(items: &[BacklogItem], story_id: i64) -> ItemStatus {
    let mut story_items = items
        .iter()
        .filter(|item| item.story_id == Some(story_id))
        .peekable();

    if story_items.peek().is_none() {
        return ItemStatus::InProgress;
    }
    if story_items.all(|item| item.status == ItemStatus::Done) {
        ItemStatus::Done
    } else {
        ItemStatus::InProgress
    }
}

/// In-progress items assigned to `member_id`, grouped by project in the order
/// each project first appears.
#[must_use]
pub fn ongoing_tasks(items: &[BacklogItem], member_id: i64) -> Vec<(i64, Vec<BacklogItem>)> {
    let mut groups: Vec<(i64, Vec<BacklogItem>)> = Vec::new();
    for item in items
        .iter()
        .filter(|item| item.is_assigned_to(member_id) && item.status == ItemStatus::InProgress)
    {
        match groups.iter_mut().find(|(project_id, _)| *project_id == item.project_id) {
            Some((_, group)) => group.push(item.clone()),
            None => groups.push((item.project_id, vec![item.clone()])),
        }
    }
    groups
}

fn update_item<F>(
    items: &[BacklogItem],
    item_id: i64,
    apply: F,
) -> Result<Vec<BacklogItem>, CoreError>
where
    F: FnOnce(&mut BacklogItem),
{
    let index = items
        .iter()
        .position(|item| item.id == item_id)
        .ok_or_else(|| CoreError::not_found("backlog item", item_id))?;

    let mut next = items.to_vec();
    apply(&mut next[index]);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn item(id: i64, sprint_id: Option<i64>) -> BacklogItem {
        BacklogItem {
            sprint_id,
            ..BacklogItem::new(id, 1, format!("item {id}"))
        }
    }

    fn assigned(id: i64, member_id: i64) -> BacklogItem {
        BacklogItem {
            member_id: Some(member_id),
            ..BacklogItem::new(id, 1, format!("item {id}"))
        }
    }

    fn ids(items: &[BacklogItem]) -> Vec<i64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn unassigned_keeps_input_order() {
        let items = vec![item(3, None), item(1, Some(5)), item(2, None)];
        assert_eq!(ids(&unassigned_items(&items)), vec![3, 2]);
    }

    #[test]
    fn items_for_sprint_keeps_input_order() {
        let items = vec![item(1, Some(5)), item(2, Some(6)), item(3, Some(5))];
        assert_eq!(ids(&items_for_sprint(&items, 5)), vec![1, 3]);
        assert!(items_for_sprint(&items, 99).is_empty());
    }

    #[test]
    fn move_into_sprint_scenario() {
        let items = vec![item(1, None), item(2, Some(5))];
        let moved = move_to_sprint(&items, 1, Some(5)).unwrap();
        assert_eq!(moved, vec![item(1, Some(5)), item(2, Some(5))]);
        assert_eq!(ids(&items_for_sprint(&moved, 5)), vec![1, 2]);
    }

    #[test]
    fn move_unknown_item_is_not_found() {
        let items = vec![item(1, None), item(2, Some(5))];
        let before = items.clone();
        let err = move_to_sprint(&items, 999, Some(5)).unwrap_err();
        assert_eq!(
            err,
            CoreError::NotFound {
                entity_type: "backlog item".into(),
                id: 999
            }
        );
        assert_eq!(items, before);
    }

    #[test]
    fn move_to_backlog_leaves_every_sprint() {
        let items = vec![item(1, Some(5)), item(2, Some(6))];
        let moved = move_to_sprint(&items, 1, None).unwrap();
        for sprint_id in [5, 6] {
            assert!(!ids(&items_for_sprint(&moved, sprint_id)).contains(&1));
        }
        assert_eq!(ids(&unassigned_items(&moved)), vec![1]);
    }

    #[rstest]
    #[case(1, Some(5))]
    #[case(1, None)]
    #[case(2, Some(7))]
    #[case(3, None)]
    fn move_is_idempotent(#[case] item_id: i64, #[case] target: Option<i64>) {
        let items = vec![item(1, None), item(2, Some(5)), item(3, Some(6))];
        let once = move_to_sprint(&items, item_id, target).unwrap();
        let twice = move_to_sprint(&once, item_id, target).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn partition_is_disjoint_and_complete() {
        let items = vec![
            item(1, None),
            item(2, Some(5)),
            item(3, Some(6)),
            item(4, Some(5)),
            item(5, None),
        ];
        let unassigned = ids(&unassigned_items(&items));
        for candidate in &items {
            let Some(sprint_id) = candidate.sprint_id else {
                assert!(unassigned.contains(&candidate.id));
                continue;
            };
            assert!(!unassigned.contains(&candidate.id));
            let hits = [5, 6]
                .iter()
                .filter(|&&s| ids(&items_for_sprint(&items, s)).contains(&candidate.id))
                .count();
            assert_eq!(hits, 1);
            assert!(ids(&items_for_sprint(&items, sprint_id)).contains(&candidate.id));
        }
    }

    #[test]
    fn filter_by_assignee_scenario() {
        let items = vec![assigned(1, 7), assigned(2, 8)];
        assert_eq!(filter_by_assignee(&items, 7, true), vec![assigned(1, 7)]);
        assert_eq!(filter_by_assignee(&items, 7, false), items);
    }

    #[test]
    fn filter_by_assignee_skips_unassigned_members() {
        let items = vec![item(1, None), assigned(2, 7)];
        assert_eq!(ids(&filter_by_assignee(&items, 7, true)), vec![2]);
    }

    #[rstest]
    #[case(Priority::High)]
    #[case(Priority::Medium)]
    #[case(Priority::Low)]
    fn cycle_priority_has_period_three(#[case] priority: Priority) {
        assert_eq!(
            cycle_priority(cycle_priority(cycle_priority(priority))),
            priority
        );
        assert_ne!(cycle_priority(priority), priority);
    }

    #[rstest]
    #[case(ItemStatus::Todo, "To Do")]
    #[case(ItemStatus::InProgress, "In Progress")]
    #[case(ItemStatus::Done, "Done")]
    fn status_label_round_trip(#[case] status: ItemStatus, #[case] label: &str) {
        assert_eq!(denormalize_status(status), label);
        assert_eq!(normalize_status(denormalize_status(status)).unwrap(), status);
    }

    #[test]
    fn unknown_status_label_is_invalid_argument() {
        assert!(matches!(
            normalize_status("Blocked"),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn set_status_and_cycle_priority_touch_one_item() {
        let items = vec![item(1, None), item(2, None)];
        let next = set_status(&items, 2, ItemStatus::Done).unwrap();
        assert_eq!(next[0], items[0]);
        assert_eq!(next[1].status, ItemStatus::Done);

        let next = cycle_item_priority(&next, 1).unwrap();
        assert_eq!(next[0].priority, Priority::Low);
        assert!(cycle_item_priority(&next, 42).is_err());
    }

    #[test]
    fn story_status_needs_all_items_done() {
        let mut a = item(1, None);
        a.story_id = Some(10);
        a.status = ItemStatus::Done;
        let mut b = item(2, None);
        b.story_id = Some(10);

        assert_eq!(derive_story_status(&[a.clone(), b.clone()], 10), ItemStatus::InProgress);
        b.status = ItemStatus::Done;
        assert_eq!(derive_story_status(&[a, b], 10), ItemStatus::Done);
        assert_eq!(derive_story_status(&[], 10), ItemStatus::InProgress);
    }

    #[test]
    fn ongoing_tasks_group_by_project() {
        let mut first = assigned(1, 7);
        first.status = ItemStatus::InProgress;
        first.project_id = 2;
        let mut second = assigned(2, 7);
        second.status = ItemStatus::InProgress;
        second.project_id = 1;
        let mut third = assigned(3, 7);
        third.status = ItemStatus::InProgress;
        third.project_id = 2;
        let todo = assigned(4, 7);
        let mut someone_else = assigned(5, 8);
        someone_else.status = ItemStatus::InProgress;

        let groups = ongoing_tasks(&[first, second, third, todo, someone_else], 7);
        let shape: Vec<(i64, Vec<i64>)> = groups
            .iter()
            .map(|(project, items)| (*project, ids(items)))
            .collect();
        assert_eq!(shape, vec![(2, vec![1, 3]), (1, vec![2])]);
    }

    #[test]
    fn find_sprint_reports_missing_id() {
        let sprints = vec![Sprint::planned(5, 1, "one")];
        assert_eq!(find_sprint(&sprints, 5).unwrap().title, "one");
        assert_eq!(
            find_sprint(&sprints, 6),
            Err(CoreError::NotFound {
                entity_type: "sprint".into(),
                id: 6,
            })
        );
    }
}
