pub mod backlog;
pub mod board;
pub mod dispatch;
pub mod members;
pub mod projects;
pub mod schema;
pub mod shared;
pub mod sprint;
pub mod story;
pub mod tasks;
