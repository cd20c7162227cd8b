use agile_core::commands::BoardCommand;
use agile_core::requests::{BacklogEdit, BacklogEditBuilder};

use crate::cli::GlobalFlags;
use crate::commands::backlog::mutate::dispatch_and_show;
use crate::commands::shared::parse::{parse_priority, parse_status};
use crate::context::AppContext;

pub struct Params {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub sprint: Option<Option<i64>>,
    pub story: Option<Option<i64>>,
    pub assignee: Option<Option<i64>>,
}

/// `--x <id>` sets, `--no-x` clears, neither leaves the field alone.
pub fn nullable(value: Option<i64>, clear: bool) -> Option<Option<i64>> {
    if clear { Some(None) } else { value.map(Some) }
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = params.id;
    let edit = build_edit(params)?;
    dispatch_and_show(BoardCommand::UpdateItem { item_id: id, edit }, id, ctx, flags).await
}

fn build_edit(params: Params) -> anyhow::Result<BacklogEdit> {
    let mut builder = BacklogEditBuilder::new();
    if let Some(title) = params.title {
        builder = builder.title(title);
    }
    if let Some(description) = params.description {
        builder = builder.description(description);
    }
    if let Some(priority) = params.priority.as_deref() {
        builder = builder.priority(parse_priority(priority)?);
    }
    if let Some(status) = params.status.as_deref() {
        builder = builder.status(parse_status(status)?);
    }
    if let Some(sprint) = params.sprint {
        builder = builder.sprint_id(sprint);
    }
    if let Some(story) = params.story {
        builder = builder.story_id(story);
    }
    if let Some(assignee) = params.assignee {
        builder = builder.member_id(assignee);
    }

    let edit = builder.build();
    if edit.is_empty() {
        anyhow::bail!(
            "At least one of --title, --description, --priority, --status, --sprint, --story or --assignee (or a --no-* flag) must be provided"
        );
    }
    Ok(edit)
}
