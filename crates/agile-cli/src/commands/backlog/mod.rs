mod create;
mod list;
mod mutate;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BacklogCommands;
use crate::context::AppContext;

/// Handle `agl backlog`.
pub async fn handle(
    action: &BacklogCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BacklogCommands::List {
            active: true, ..
        } => list::active(ctx, flags).await,
        BacklogCommands::List {
            sprint, unassigned, ..
        } => list::run(*sprint, *unassigned, ctx, flags).await,
        BacklogCommands::Get { id } => list::get(*id, ctx, flags).await,
        BacklogCommands::Create {
            title,
            description,
            priority,
            sprint,
            story,
            assignee,
        } => {
            let params = create::Params {
                title: title.clone(),
                description: description.clone(),
                priority: priority.clone(),
                sprint: *sprint,
                story: *story,
                assignee: *assignee,
            };
            create::run(params, ctx, flags).await
        }
        BacklogCommands::Update {
            id,
            title,
            description,
            priority,
            status,
            sprint,
            no_sprint,
            story,
            no_story,
            assignee,
            no_assignee,
        } => {
            let params = update::Params {
                id: *id,
                title: title.clone(),
                description: description.clone(),
                priority: priority.clone(),
                status: status.clone(),
                sprint: update::nullable(*sprint, *no_sprint),
                story: update::nullable(*story, *no_story),
                assignee: update::nullable(*assignee, *no_assignee),
            };
            update::run(params, ctx, flags).await
        }
        BacklogCommands::Move { id, sprint } => mutate::move_item(*id, *sprint, ctx, flags).await,
        BacklogCommands::Status { id, status } => {
            mutate::change_status(*id, status, ctx, flags).await
        }
        BacklogCommands::CyclePriority { id } => mutate::cycle_priority(*id, ctx, flags).await,
        BacklogCommands::Delete { id } => mutate::delete(*id, ctx, flags).await,
    }
}
