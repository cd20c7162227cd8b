use clap::Subcommand;

/// User story commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StoryCommands {
    /// List stories with their derived status.
    List,
    /// Create a story.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Replace a story's title and description.
    Update {
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a story.
    Delete { id: i64 },
}
