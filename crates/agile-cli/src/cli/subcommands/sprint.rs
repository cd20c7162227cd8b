use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Sprint commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SprintCommands {
    /// List sprints, including completed ones.
    List,
    /// Show one sprint.
    Get { id: i64 },
    /// Work remaining after each completed sprint.
    Burndown,
    /// Create an empty planned sprint.
    Create,
    /// Edit a sprint's title, goal and dates.
    Update {
        id: i64,
        #[command(flatten)]
        form: SprintFormArgs,
    },
    /// Start a planned sprint.
    Start {
        id: i64,
        #[command(flatten)]
        form: SprintFormArgs,
    },
    /// Complete an active sprint.
    Complete { id: i64 },
    /// Delete a sprint. Its items return to the backlog.
    Delete { id: i64 },
}

/// Sprint form fields. Omitted fields keep the sprint's current value.
#[derive(Clone, Debug, Default, Args)]
pub struct SprintFormArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub goal: Option<String>,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,
}
