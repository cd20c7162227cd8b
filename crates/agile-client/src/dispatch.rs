//! Board command dispatcher.
//!
//! Every [`BoardCommand`] is first planned against the current snapshot into a
//! single [`BackendRequest`]. Planning is pure, so unknown ids, invalid forms
//! and forbidden sprint transitions are rejected before any I/O. The request
//! is then sent and the snapshot refetched.

use agile_core::commands::BoardCommand;
use agile_core::enums::SprintPhase;
use agile_core::errors::CoreError;
use agile_core::model::{cycle_item_priority, find_item, move_to_sprint, set_status};
use agile_core::requests::{BacklogCreateRequest, BacklogUpdateRequest, SprintForm};

use crate::backend::BackendClient;
use crate::error::ClientError;
use crate::session::{ProjectSession, Snapshot};

/// The one backend call a command turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendRequest {
    UpdateItem {
        item_id: i64,
        request: BacklogUpdateRequest,
    },
    CreateItem(BacklogCreateRequest),
    DeleteItem {
        item_id: i64,
    },
    CreateSprint,
    UpdateSprint {
        sprint_id: i64,
        form: SprintForm,
    },
    StartSprint {
        sprint_id: i64,
        form: SprintForm,
    },
    CompleteSprint {
        sprint_id: i64,
    },
    DeleteSprint {
        sprint_id: i64,
    },
}

/// Plan `command` against `snapshot`.
///
/// Item updates mirror the model's output for the touched item, so the backend
/// receives the full item with the single field changed.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] for ids missing from the snapshot,
/// [`CoreError::InvalidArgument`] for invalid forms or empty edits, and
/// [`CoreError::InvalidTransition`] when a sprint cannot be started or
/// completed from its current phase.
pub fn plan(snapshot: &Snapshot, command: &BoardCommand) -> Result<BackendRequest, CoreError> {
    match command {
        BoardCommand::MoveToSprint(mv) => {
            if let Some(sprint_id) = mv.target_sprint_id {
                snapshot.sprint(sprint_id)?;
            }
            let items = move_to_sprint(&snapshot.items, mv.item_id, mv.target_sprint_id)?;
            updated(&items, mv.item_id)
        }
        BoardCommand::ChangeStatus { item_id, status } => {
            let items = set_status(&snapshot.items, *item_id, *status)?;
            updated(&items, *item_id)
        }
        BoardCommand::CyclePriority { item_id } => {
            let items = cycle_item_priority(&snapshot.items, *item_id)?;
            updated(&items, *item_id)
        }
        BoardCommand::UpdateItem { item_id, edit } => {
            if edit.is_empty() {
                return Err(CoreError::InvalidArgument("nothing to update".into()));
            }
            if let Some(Some(sprint_id)) = edit.sprint_id {
                snapshot.sprint(sprint_id)?;
            }
            let next = edit.apply_to(snapshot.item(*item_id)?);
            if next.title.trim().is_empty() {
                return Err(CoreError::InvalidArgument(
                    "backlog item title must not be empty".into(),
                ));
            }
            Ok(BackendRequest::UpdateItem {
                item_id: *item_id,
                request: BacklogUpdateRequest::from_item(&next),
            })
        }
        BoardCommand::CreateItem(request) => {
            request.validate()?;
            if let Some(sprint_id) = request.sprint_id {
                snapshot.sprint(sprint_id)?;
            }
            Ok(BackendRequest::CreateItem(request.clone()))
        }
        BoardCommand::DeleteItem { item_id } => {
            snapshot.item(*item_id)?;
            Ok(BackendRequest::DeleteItem { item_id: *item_id })
        }
        BoardCommand::CreateSprint => Ok(BackendRequest::CreateSprint),
        BoardCommand::UpdateSprint { sprint_id, form } => {
            snapshot.sprint(*sprint_id)?;
            form.validate()?;
            Ok(BackendRequest::UpdateSprint {
                sprint_id: *sprint_id,
                form: form.clone(),
            })
        }
        BoardCommand::StartSprint { sprint_id, form } => {
            snapshot
                .sprint(*sprint_id)?
                .ensure_transition(SprintPhase::Active)?;
            form.validate()?;
            Ok(BackendRequest::StartSprint {
                sprint_id: *sprint_id,
                form: form.clone(),
            })
        }
        BoardCommand::CompleteSprint { sprint_id } => {
            snapshot
                .sprint(*sprint_id)?
                .ensure_transition(SprintPhase::Completed)?;
            Ok(BackendRequest::CompleteSprint {
                sprint_id: *sprint_id,
            })
        }
        BoardCommand::DeleteSprint { sprint_id } => {
            snapshot.sprint(*sprint_id)?;
            Ok(BackendRequest::DeleteSprint {
                sprint_id: *sprint_id,
            })
        }
    }
}

fn updated(
    items: &[agile_core::entities::BacklogItem],
    item_id: i64,
) -> Result<BackendRequest, CoreError> {
    let item = find_item(items, item_id)?;
    Ok(BackendRequest::UpdateItem {
        item_id,
        request: BacklogUpdateRequest::from_item(item),
    })
}

impl<B: BackendClient> ProjectSession<B> {
    /// Plan, send and reconcile one board command.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoProjectSelected`] without a selected project,
    /// [`ClientError::Core`] if planning rejects the command, or the backend
    /// error. On any error the snapshot is left as it was.
    pub async fn dispatch(&mut self, command: &BoardCommand) -> Result<&Snapshot, ClientError> {
        let snapshot = self.snapshot.as_ref().ok_or(ClientError::NoProjectSelected)?;
        let project_id = snapshot.project_id();
        let request = plan(snapshot, command)?;

        tracing::debug!(project_id, command = command.name(), "dispatching board command");
        if let Err(e) = self.send(project_id, &request).await {
            tracing::warn!(project_id, command = command.name(), %e, "board command failed");
            return Err(e);
        }
        self.refresh().await
    }

    async fn send(&self, project_id: i64, request: &BackendRequest) -> Result<(), ClientError> {
        let backend = &self.backend;
        match request {
            BackendRequest::UpdateItem { item_id, request } => {
                backend
                    .update_backlog_item(project_id, *item_id, request)
                    .await?;
            }
            BackendRequest::CreateItem(request) => {
                backend.create_backlog_item(project_id, request).await?;
            }
            BackendRequest::DeleteItem { item_id } => {
                backend.delete_backlog_item(project_id, *item_id).await?;
            }
            BackendRequest::CreateSprint => {
                backend.create_sprint(project_id).await?;
            }
            BackendRequest::UpdateSprint { sprint_id, form } => {
                backend.update_sprint(project_id, *sprint_id, form).await?;
            }
            BackendRequest::StartSprint { sprint_id, form } => {
                backend.start_sprint(project_id, *sprint_id, form).await?;
            }
            BackendRequest::CompleteSprint { sprint_id } => {
                backend.complete_sprint(project_id, *sprint_id).await?;
            }
            BackendRequest::DeleteSprint { sprint_id } => {
                backend.delete_sprint(project_id, *sprint_id).await?;
            }
        }
        Ok(())
    }
}
