mod backlog;
mod sprint;
mod story;

pub use backlog::BacklogCommands;
pub use sprint::{SprintCommands, SprintFormArgs};
pub use story::StoryCommands;
