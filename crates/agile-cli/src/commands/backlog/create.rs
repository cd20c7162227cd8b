use std::collections::HashSet;

use agile_core::commands::BoardCommand;
use agile_core::requests::BacklogCreateRequest;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_priority;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub sprint: Option<i64>,
    pub story: Option<i64>,
    pub assignee: Option<i64>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = build_request(params)?;

    let mut session = ctx.open_session(false).await?;
    let before: HashSet<i64> = session
        .snapshot()
        .map(|snapshot| snapshot.items.iter().map(|item| item.id).collect())
        .unwrap_or_default();

    let snapshot = session
        .dispatch(&BoardCommand::CreateItem(request))
        .await?;
    let created = snapshot
        .items
        .iter()
        .filter(|item| !before.contains(&item.id))
        .collect::<Vec<_>>();
    output(&created, flags.format)
}

fn build_request(params: Params) -> anyhow::Result<BacklogCreateRequest> {
    let mut request = BacklogCreateRequest::new(params.title);
    if let Some(description) = params.description {
        request.description = description;
    }
    if let Some(priority) = params.priority.as_deref() {
        request.priority = parse_priority(priority)?;
    }
    request.sprint_id = params.sprint;
    request.story_id = params.story;
    request.member_id = params.assignee;
    request.validate()?;
    Ok(request)
}
