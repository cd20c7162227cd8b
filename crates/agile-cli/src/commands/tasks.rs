use agile_core::entities::BacklogItem;
use agile_core::model::ongoing_tasks;
use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_rows;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectTasks {
    project_id: i64,
    items: Vec<BacklogItem>,
}

/// Handle `agl tasks`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let member_id = ctx.member_id().await?;
    let items = ctx
        .client
        .my_tasks()
        .await
        .context("failed to fetch my tasks")?;

    let groups = ongoing_tasks(&items, member_id)
        .into_iter()
        .map(|(project_id, items)| ProjectTasks { project_id, items })
        .collect::<Vec<_>>();

    let rows = groups
        .iter()
        .flat_map(|group| {
            group.items.iter().map(|item| {
                vec![
                    group.project_id.to_string(),
                    item.id.to_string(),
                    item.title.clone(),
                    item.priority.short_label().to_string(),
                    item.sprint_id.map_or_else(|| String::from("-"), |id| id.to_string()),
                ]
            })
        })
        .collect::<Vec<_>>();

    output_rows(
        &groups,
        &["project", "id", "title", "pri", "sprint"],
        &rows,
        flags.format,
    )
}
