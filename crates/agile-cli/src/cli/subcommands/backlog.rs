use clap::Subcommand;

/// Backlog item commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BacklogCommands {
    /// List items, optionally limited to one sprint or the unassigned backlog.
    List {
        #[arg(long, conflicts_with_all = ["unassigned", "active"])]
        sprint: Option<i64>,
        #[arg(long, conflicts_with = "active")]
        unassigned: bool,
        /// Only items of the project's active sprints.
        #[arg(long)]
        active: bool,
    },
    /// Get one item.
    Get { id: i64 },
    /// Create an item.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// high, medium or low
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        sprint: Option<i64>,
        #[arg(long)]
        story: Option<i64>,
        #[arg(long)]
        assignee: Option<i64>,
    },
    /// Edit an item.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        /// todo, in-progress, done (or a board label such as "In Progress")
        #[arg(long)]
        status: Option<String>,
        #[arg(long, conflicts_with = "no_sprint")]
        sprint: Option<i64>,
        /// Move the item back to the unassigned backlog.
        #[arg(long)]
        no_sprint: bool,
        #[arg(long, conflicts_with = "no_story")]
        story: Option<i64>,
        #[arg(long)]
        no_story: bool,
        #[arg(long, conflicts_with = "no_assignee")]
        assignee: Option<i64>,
        #[arg(long)]
        no_assignee: bool,
    },
    /// Move an item into a sprint, or back to the backlog when `--sprint` is omitted.
    Move {
        id: i64,
        #[arg(long)]
        sprint: Option<i64>,
    },
    /// Change an item's status.
    Status { id: i64, status: String },
    /// Advance an item's priority (high, medium, low, high, ...).
    CyclePriority { id: i64 },
    /// Delete an item.
    Delete { id: i64 },
}
