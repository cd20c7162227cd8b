//! Per-project session state.
//!
//! A [`ProjectSession`] owns the latest [`Snapshot`] of one project. The
//! snapshot is replaced wholesale by every successful fetch and is never
//! patched in place.

use agile_core::context::ProjectContext;
use agile_core::entities::{BacklogItem, Sprint};
use agile_core::errors::CoreError;
use agile_core::model::{find_item, find_sprint};
use agile_core::view::{BoardView, ViewFilter};
use chrono::{DateTime, Utc};

use crate::backend::BackendClient;
use crate::error::ClientError;

/// Items and sprints of one project as of `fetched_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub context: ProjectContext,
    pub items: Vec<BacklogItem>,
    pub sprints: Vec<Sprint>,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    #[must_use]
    pub const fn project_id(&self) -> i64 {
        self.context.project_id
    }

    #[must_use]
    pub fn view(&self, filter: ViewFilter) -> BoardView {
        BoardView::derive(&self.items, &self.sprints, filter)
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the item is not in this snapshot.
    pub fn item(&self, item_id: i64) -> Result<&BacklogItem, CoreError> {
        find_item(&self.items, item_id)
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the sprint is not in this snapshot.
    pub fn sprint(&self, sprint_id: i64) -> Result<&Sprint, CoreError> {
        find_sprint(&self.sprints, sprint_id)
    }
}

/// Snapshot holder for the selected project, backed by `B`.
pub struct ProjectSession<B> {
    pub(crate) backend: B,
    pub(crate) snapshot: Option<Snapshot>,
}

impl<B: BackendClient> ProjectSession<B> {
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            snapshot: None,
        }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub const fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    #[must_use]
    pub fn context(&self) -> Option<ProjectContext> {
        self.snapshot.as_ref().map(|snapshot| snapshot.context)
    }

    /// Drop the snapshot. The session has no selected project afterwards.
    pub fn discard(&mut self) {
        if let Some(old) = self.snapshot.take() {
            tracing::debug!(project_id = old.project_id(), "snapshot discarded");
        }
    }

    /// Select `context` and load its snapshot.
    ///
    /// Selecting a different project discards the previous snapshot before
    /// fetching, so a failed fetch leaves no project selected.
    ///
    /// # Errors
    ///
    /// Returns the backend error if items or sprints cannot be fetched.
    pub async fn select(&mut self, context: ProjectContext) -> Result<&Snapshot, ClientError> {
        if self
            .context()
            .is_some_and(|current| current.project_id != context.project_id)
        {
            self.discard();
        }
        self.load(context).await
    }

    /// Refetch the selected project.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoProjectSelected`] without a selected project,
    /// or the backend error; the previous snapshot is kept on failure.
    pub async fn refresh(&mut self) -> Result<&Snapshot, ClientError> {
        let context = self.context().ok_or(ClientError::NoProjectSelected)?;
        self.load(context).await
    }

    async fn load(&mut self, context: ProjectContext) -> Result<&Snapshot, ClientError> {
        let project_id = context.project_id;
        let (items, sprints) = tokio::try_join!(
            self.backend.list_backlog_items(project_id),
            self.backend.list_sprints(project_id),
        )?;

        tracing::info!(
            project_id,
            items = items.len(),
            sprints = sprints.len(),
            "snapshot replaced"
        );
        let snapshot = self.snapshot.insert(Snapshot {
            context,
            items,
            sprints,
            fetched_at: Utc::now(),
        });
        Ok(&*snapshot)
    }
}
