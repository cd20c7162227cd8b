use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Board => commands::board::handle(ctx, flags).await,
        Commands::Backlog { action } => commands::backlog::handle(&action, ctx, flags).await,
        Commands::Sprint { action } => commands::sprint::handle(&action, ctx, flags).await,
        Commands::Story { action } => commands::story::handle(&action, ctx, flags).await,
        Commands::Projects => commands::projects::handle(ctx, flags).await,
        Commands::Members => commands::members::handle(ctx, flags).await,
        Commands::Tasks => commands::tasks::handle(ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
