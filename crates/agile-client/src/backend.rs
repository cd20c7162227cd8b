//! Backend seams.
//!
//! The session only ever talks to a [`BackendClient`]; the CLI additionally
//! resolves assignees through a [`MemberDirectory`]. [`crate::HttpBackendClient`]
//! implements both against the REST API, and tests substitute in-memory fakes.

use std::future::Future;

use agile_core::entities::{BacklogItem, Member, Sprint};
use agile_core::requests::{BacklogCreateRequest, BacklogUpdateRequest, SprintForm};

use crate::error::ClientError;

/// Result of a backend call.
pub type BackendResult<T> = Result<T, ClientError>;

/// Item and sprint operations of the backend.
///
/// Every mutation is a single request; callers reconcile by refetching.
pub trait BackendClient: Send + Sync {
    fn list_backlog_items(
        &self,
        project_id: i64,
    ) -> impl Future<Output = BackendResult<Vec<BacklogItem>>> + Send;

    fn get_backlog_item(
        &self,
        project_id: i64,
        item_id: i64,
    ) -> impl Future<Output = BackendResult<BacklogItem>> + Send;

    fn create_backlog_item(
        &self,
        project_id: i64,
        request: &BacklogCreateRequest,
    ) -> impl Future<Output = BackendResult<BacklogItem>> + Send;

    /// Full replacement of the item; a `null` sprint id unassigns it.
    fn update_backlog_item(
        &self,
        project_id: i64,
        item_id: i64,
        request: &BacklogUpdateRequest,
    ) -> impl Future<Output = BackendResult<BacklogItem>> + Send;

    fn delete_backlog_item(
        &self,
        project_id: i64,
        item_id: i64,
    ) -> impl Future<Output = BackendResult<()>> + Send;

    fn list_sprints(&self, project_id: i64)
    -> impl Future<Output = BackendResult<Vec<Sprint>>> + Send;

    /// Create an empty, planned sprint.
    fn create_sprint(&self, project_id: i64) -> impl Future<Output = BackendResult<Sprint>> + Send;

    fn update_sprint(
        &self,
        project_id: i64,
        sprint_id: i64,
        form: &SprintForm,
    ) -> impl Future<Output = BackendResult<Sprint>> + Send;

    fn start_sprint(
        &self,
        project_id: i64,
        sprint_id: i64,
        form: &SprintForm,
    ) -> impl Future<Output = BackendResult<Sprint>> + Send;

    fn complete_sprint(
        &self,
        project_id: i64,
        sprint_id: i64,
    ) -> impl Future<Output = BackendResult<Sprint>> + Send;

    fn delete_sprint(
        &self,
        project_id: i64,
        sprint_id: i64,
    ) -> impl Future<Output = BackendResult<()>> + Send;
}

/// Read-only lookup of project members.
pub trait MemberDirectory: Send + Sync {
    fn list_members(&self, project_id: i64)
    -> impl Future<Output = BackendResult<Vec<Member>>> + Send;

    /// The member the session cookie belongs to.
    fn current_member(&self) -> impl Future<Output = BackendResult<Member>> + Send;
}
