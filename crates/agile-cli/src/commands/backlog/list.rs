use agile_client::BackendClient;
use agile_core::model::{items_for_sprint, unassigned_items};
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::commands::board::load_members;
use crate::commands::shared::rows::{ITEM_HEADERS, item_row, item_rows};
use crate::context::{AppContext, view_filter};
use crate::output::output_rows;

pub async fn run(
    sprint: Option<i64>,
    unassigned: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.open_session(flags.mine).await?;
    let Some(snapshot) = session.snapshot() else {
        anyhow::bail!("project snapshot was not loaded");
    };

    let visible = view_filter(&snapshot.context).apply(&snapshot.items);
    let items = match sprint {
        Some(sprint_id) => {
            snapshot.sprint(sprint_id)?;
            items_for_sprint(&visible, sprint_id)
        }
        None if unassigned => unassigned_items(&visible),
        None => visible,
    };

    let members = load_members(ctx).await;
    output_rows(&items, &ITEM_HEADERS, &item_rows(&items, &members), flags.format)
}

/// Items of the active sprints, straight from the backend.
pub async fn active(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let context = ctx.project_context(flags.mine).await?;
    let items = ctx
        .client
        .list_active_backlog_items(context.project_id)
        .await
        .with_context(|| format!("failed to list active items of project {}", context.project_id))?;
    let items = view_filter(&context).apply(&items);
    let members = load_members(ctx).await;
    output_rows(&items, &ITEM_HEADERS, &item_rows(&items, &members), flags.format)
}

pub async fn get(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project_id = ctx.project_id()?;
    let item = ctx
        .client
        .get_backlog_item(project_id, id)
        .await
        .with_context(|| format!("failed to fetch backlog item {id}"))?;
    let members = load_members(ctx).await;
    output_rows(&item, &ITEM_HEADERS, &[item_row(&item, &members)], flags.format)
}
