//! # agile-core
//!
//! Backlog and sprint domain model for the agile board.
//!
//! This crate holds everything that can be computed without talking to the
//! backend:
//! - Entity structs mirroring the REST payloads (backlog items, sprints, members, stories, projects, burndown)
//! - Priority and status enums, plus the sprint lifecycle state machine
//! - The backlog/sprint membership model: partitioning, assignee filtering, moves
//! - Derived board views
//! - Board commands and request payloads sent to the backend
//! - Cross-cutting error types

pub mod commands;
pub mod context;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod model;
pub mod requests;
pub mod view;
