//! # agile-client
//!
//! Backend access and session state for the agile board.
//!
//! - [`BackendClient`] / [`MemberDirectory`]: the async seams to the backend.
//! - [`HttpBackendClient`]: reqwest implementation of both against the REST API.
//! - [`ProjectSession`]: holds the selected project's [`Snapshot`] and runs
//!   board commands through [`ProjectSession::dispatch`].

mod backend;
mod client;
mod dispatch;
mod error;
mod http;
mod session;

pub use backend::{BackendClient, BackendResult, MemberDirectory};
pub use client::HttpBackendClient;
pub use dispatch::{BackendRequest, plan};
pub use error::ClientError;
pub use session::{ProjectSession, Snapshot};
