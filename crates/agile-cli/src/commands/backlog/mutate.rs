use agile_core::commands::{BoardCommand, MoveToSprintCommand};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_status;
use crate::context::AppContext;
use crate::output::output;

/// Dispatch `command` and print item `item_id` from the refetched snapshot.
pub async fn dispatch_and_show(
    command: BoardCommand,
    item_id: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut session = ctx.open_session(false).await?;
    let snapshot = session.dispatch(&command).await?;
    output(snapshot.item(item_id)?, flags.format)
}

pub async fn move_item(
    id: i64,
    sprint: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let command = sprint.map_or_else(
        || MoveToSprintCommand::to_backlog(id),
        |sprint_id| MoveToSprintCommand::to_sprint(id, sprint_id),
    );
    dispatch_and_show(command.into(), id, ctx, flags).await
}

pub async fn change_status(
    id: i64,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_status(status)?;
    dispatch_and_show(BoardCommand::ChangeStatus { item_id: id, status }, id, ctx, flags).await
}

pub async fn cycle_priority(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    dispatch_and_show(BoardCommand::CyclePriority { item_id: id }, id, ctx, flags).await
}

pub async fn delete(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = ctx.open_session(false).await?;
    session
        .dispatch(&BoardCommand::DeleteItem { item_id: id })
        .await?;
    output(&serde_json::json!({ "deleted": id }), flags.format)
}
