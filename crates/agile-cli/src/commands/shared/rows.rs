use agile_core::entities::{BacklogItem, Member, Sprint};

pub const ITEM_HEADERS: [&str; 6] = ["id", "title", "pri", "status", "sprint", "assignee"];

/// Display name of `member_id`, falling back to `#id` for unknown members.
pub fn assignee_name(members: &[Member], member_id: Option<i64>) -> String {
    let Some(member_id) = member_id else {
        return String::from("-");
    };
    members
        .iter()
        .find(|member| member.member_id == member_id && !member.name.is_empty())
        .map_or_else(|| format!("#{member_id}"), |member| member.name.clone())
}

pub fn item_row(item: &BacklogItem, members: &[Member]) -> Vec<String> {
    vec![
        item.id.to_string(),
        item.title.clone(),
        item.priority.short_label().to_string(),
        item.status.label().to_string(),
        item.sprint_id.map_or_else(|| String::from("-"), |id| id.to_string()),
        assignee_name(members, item.member_id),
    ]
}

pub fn item_rows(items: &[BacklogItem], members: &[Member]) -> Vec<Vec<String>> {
    items.iter().map(|item| item_row(item, members)).collect()
}

pub const SPRINT_HEADERS: [&str; 6] = ["id", "title", "phase", "goal", "start", "end"];

pub fn sprint_row(sprint: &Sprint) -> Vec<String> {
    let date = |date: Option<chrono::NaiveDate>| date.map_or_else(|| String::from("-"), |d| d.to_string());
    vec![
        sprint.id.to_string(),
        sprint.display_title(),
        sprint.phase().to_string(),
        sprint.goal.clone().unwrap_or_else(|| String::from("-")),
        date(sprint.start_date),
        date(sprint.end_date),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use agile_core::enums::Priority;

    fn members() -> Vec<Member> {
        vec![Member {
            member_id: 7,
            name: "Kim".into(),
            profile_image_url: None,
        }]
    }

    #[test]
    fn assignee_falls_back_to_id() {
        assert_eq!(assignee_name(&members(), Some(7)), "Kim");
        assert_eq!(assignee_name(&members(), Some(8)), "#8");
        assert_eq!(assignee_name(&members(), None), "-");
    }

    #[test]
    fn item_row_uses_short_priority_and_label() {
        let mut item = BacklogItem::new(3, 1, "task");
        item.priority = Priority::High;
        item.member_id = Some(7);
        assert_eq!(
            item_row(&item, &members()),
            vec!["3", "task", "H", "To Do", "-", "Kim"]
        );
    }

    #[test]
    fn sprint_row_shows_display_title() {
        let row = sprint_row(&Sprint::planned(4, 1, ""));
        assert_eq!(row[1], "Sprint 4");
        assert_eq!(row[2], "planned");
    }
}
