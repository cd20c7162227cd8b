mod burndown;
mod form;

use std::collections::HashSet;

use agile_core::commands::BoardCommand;
use agile_core::entities::Sprint;
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SprintCommands;
use crate::commands::shared::rows::{SPRINT_HEADERS, sprint_row};
use crate::context::AppContext;
use crate::output::{output, output_rows};

/// Handle `agl sprint`.
pub async fn handle(
    action: &SprintCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SprintCommands::List => {
            let session = ctx.open_session(false).await?;
            let sprints = session
                .snapshot()
                .map(|snapshot| snapshot.sprints.clone())
                .unwrap_or_default();
            let rows = sprints.iter().map(sprint_row).collect::<Vec<_>>();
            output_rows(&sprints, &SPRINT_HEADERS, &rows, flags.format)
        }
        SprintCommands::Get { id } => {
            let project_id = ctx.project_id()?;
            let sprint = ctx
                .client
                .get_sprint(project_id, *id)
                .await
                .with_context(|| format!("failed to fetch sprint {id}"))?;
            output_rows(&sprint, &SPRINT_HEADERS, &[sprint_row(&sprint)], flags.format)
        }
        SprintCommands::Burndown => burndown::run(ctx, flags).await,
        SprintCommands::Create => {
            let mut session = ctx.open_session(false).await?;
            let before: HashSet<i64> = session
                .snapshot()
                .map(|snapshot| snapshot.sprints.iter().map(|sprint| sprint.id).collect())
                .unwrap_or_default();
            let snapshot = session.dispatch(&BoardCommand::CreateSprint).await?;
            let created: Vec<&Sprint> = snapshot
                .sprints
                .iter()
                .filter(|sprint| !before.contains(&sprint.id))
                .collect();
            output(&created, flags.format)
        }
        SprintCommands::Update { id, form } | SprintCommands::Start { id, form } => {
            let mut session = ctx.open_session(false).await?;
            let current = session
                .snapshot()
                .map(|snapshot| snapshot.sprint(*id))
                .transpose()?
                .cloned();
            let Some(current) = current else {
                anyhow::bail!("project snapshot was not loaded");
            };
            let form = form::merge(&current, form);
            let command = if matches!(action, SprintCommands::Start { .. }) {
                BoardCommand::StartSprint {
                    sprint_id: *id,
                    form,
                }
            } else {
                BoardCommand::UpdateSprint {
                    sprint_id: *id,
                    form,
                }
            };
            let snapshot = session.dispatch(&command).await?;
            output(snapshot.sprint(*id)?, flags.format)
        }
        SprintCommands::Complete { id } => {
            let mut session = ctx.open_session(false).await?;
            let snapshot = session
                .dispatch(&BoardCommand::CompleteSprint { sprint_id: *id })
                .await?;
            output(snapshot.sprint(*id)?, flags.format)
        }
        SprintCommands::Delete { id } => {
            let mut session = ctx.open_session(false).await?;
            session
                .dispatch(&BoardCommand::DeleteSprint { sprint_id: *id })
                .await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
