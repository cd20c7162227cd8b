use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{BacklogCommands, SprintCommands, StoryCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the backlog and every sprint still on the board.
    Board,
    /// Backlog items.
    Backlog {
        #[command(subcommand)]
        action: BacklogCommands,
    },
    /// Sprints.
    Sprint {
        #[command(subcommand)]
        action: SprintCommands,
    },
    /// User stories.
    Story {
        #[command(subcommand)]
        action: StoryCommands,
    },
    /// List the projects I have joined.
    Projects,
    /// List project members.
    Members,
    /// My in-progress items across all projects.
    Tasks,
    /// Print the JSON schema of an entity.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity to describe.
    #[arg(value_enum)]
    pub entity: SchemaEntity,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaEntity {
    BacklogItem,
    Sprint,
    Member,
    Story,
    Project,
    Burndown,
    Board,
}
