use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `agl projects`. Needs no selected project.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let projects = ctx
        .client
        .list_projects()
        .await
        .context("failed to list projects")?;
    let selected = ctx.project_id().ok();
    let rows = projects
        .iter()
        .map(|project| {
            vec![
                project.id.to_string(),
                project.title.clone(),
                if project.is_admin { "admin" } else { "member" }.to_string(),
                if selected == Some(project.id) { "*" } else { "" }.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    output_rows(&projects, &["id", "title", "role", "selected"], &rows, flags.format)
}
