//! Session and dispatcher tests against an in-memory backend.

use std::sync::Mutex;

use agile_client::{BackendClient, BackendResult, ClientError, ProjectSession};
use agile_core::commands::{BoardCommand, MoveToSprintCommand};
use agile_core::context::ProjectContext;
use agile_core::entities::{BacklogItem, Sprint};
use agile_core::enums::{ItemStatus, SprintPhase};
use agile_core::errors::CoreError;
use agile_core::requests::{BacklogCreateRequest, BacklogUpdateRequest, SprintForm};
use agile_core::view::ViewFilter;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

#[derive(Default)]
struct State {
    items: Vec<BacklogItem>,
    sprints: Vec<Sprint>,
    calls: Vec<String>,
    next_id: i64,
    fail_mutations: bool,
    fail_reads: bool,
}

#[derive(Default)]
struct FakeBackend {
    state: Mutex<State>,
}

impl FakeBackend {
    fn seeded() -> Self {
        let mut active = Sprint::planned(5, 1, "current");
        active.is_activate = true;
        let mut in_sprint = BacklogItem::new(2, 1, "in sprint");
        in_sprint.sprint_id = Some(5);
        in_sprint.member_id = Some(7);
        let mut other_project = BacklogItem::new(3, 2, "elsewhere");
        other_project.member_id = Some(7);

        Self {
            state: Mutex::new(State {
                items: vec![BacklogItem::new(1, 1, "loose"), in_sprint, other_project],
                sprints: vec![active, Sprint::planned(6, 1, "next")],
                next_id: 100,
                ..State::default()
            }),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    fn set_fail_mutations(&self, fail: bool) {
        self.state.lock().unwrap().fail_mutations = fail;
    }

    fn set_fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    fn mutate<T>(&self, call: String, f: impl FnOnce(&mut State) -> BackendResult<T>) -> BackendResult<T> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.fail_mutations {
            return Err(ClientError::Server {
                status: 500,
                message: "backend down".into(),
            });
        }
        f(&mut state)
    }

    fn read<T>(&self, call: String, f: impl FnOnce(&State) -> T) -> BackendResult<T> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.fail_reads {
            return Err(ClientError::Server {
                status: 503,
                message: "unavailable".into(),
            });
        }
        Ok(f(&state))
    }
}

fn not_found(entity: &str, id: i64) -> ClientError {
    ClientError::Server {
        status: 404,
        message: format!("{entity} {id} not found"),
    }
}

impl BackendClient for FakeBackend {
    async fn list_backlog_items(&self, project_id: i64) -> BackendResult<Vec<BacklogItem>> {
        self.read(format!("list_items {project_id}"), |s| {
            s.items
                .iter()
                .filter(|item| item.project_id == project_id)
                .cloned()
                .collect()
        })
    }

    async fn get_backlog_item(&self, project_id: i64, item_id: i64) -> BackendResult<BacklogItem> {
        self.read(format!("get_item {project_id} {item_id}"), |s| {
            s.items.iter().find(|item| item.id == item_id).cloned()
        })?
        .ok_or_else(|| not_found("item", item_id))
    }

    async fn create_backlog_item(
        &self,
        project_id: i64,
        request: &BacklogCreateRequest,
    ) -> BackendResult<BacklogItem> {
        self.mutate(format!("create_item {project_id}"), |s| {
            s.next_id += 1;
            let item = BacklogItem {
                sprint_id: request.sprint_id,
                member_id: request.member_id,
                priority: request.priority,
                ..BacklogItem::new(s.next_id, project_id, request.title.clone())
            };
            s.items.push(item.clone());
            Ok(item)
        })
    }

    async fn update_backlog_item(
        &self,
        project_id: i64,
        item_id: i64,
        request: &BacklogUpdateRequest,
    ) -> BackendResult<BacklogItem> {
        self.mutate(format!("update_item {project_id} {item_id}"), |s| {
            let item = s
                .items
                .iter_mut()
                .find(|item| item.id == item_id)
                .ok_or_else(|| not_found("item", item_id))?;
            item.title.clone_from(&request.title);
            item.description.clone_from(&request.description);
            item.priority = request.priority;
            item.status = request.status;
            item.sprint_id = request.sprint_id;
            item.story_id = request.story_id;
            item.member_id = request.member_id;
            Ok(item.clone())
        })
    }

    async fn delete_backlog_item(&self, project_id: i64, item_id: i64) -> BackendResult<()> {
        self.mutate(format!("delete_item {project_id} {item_id}"), |s| {
            s.items.retain(|item| item.id != item_id);
            Ok(())
        })
    }

    async fn list_sprints(&self, project_id: i64) -> BackendResult<Vec<Sprint>> {
        self.read(format!("list_sprints {project_id}"), |s| {
            s.sprints
                .iter()
                .filter(|sprint| sprint.project_id == project_id)
                .cloned()
                .collect()
        })
    }

    async fn create_sprint(&self, project_id: i64) -> BackendResult<Sprint> {
        self.mutate(format!("create_sprint {project_id}"), |s| {
            s.next_id += 1;
            let sprint = Sprint::planned(s.next_id, project_id, "");
            s.sprints.push(sprint.clone());
            Ok(sprint)
        })
    }

    async fn update_sprint(
        &self,
        project_id: i64,
        sprint_id: i64,
        form: &SprintForm,
    ) -> BackendResult<Sprint> {
        self.mutate(format!("update_sprint {project_id} {sprint_id}"), |s| {
            let sprint = s
                .sprints
                .iter_mut()
                .find(|sprint| sprint.id == sprint_id)
                .ok_or_else(|| not_found("sprint", sprint_id))?;
            sprint.title.clone_from(&form.title);
            sprint.goal = Some(form.goal.clone());
            sprint.start_date = form.start_date;
            sprint.end_date = form.end_date;
            Ok(sprint.clone())
        })
    }

    async fn start_sprint(
        &self,
        project_id: i64,
        sprint_id: i64,
        form: &SprintForm,
    ) -> BackendResult<Sprint> {
        self.mutate(format!("start_sprint {project_id} {sprint_id}"), |s| {
            let sprint = s
                .sprints
                .iter_mut()
                .find(|sprint| sprint.id == sprint_id)
                .ok_or_else(|| not_found("sprint", sprint_id))?;
            sprint.title.clone_from(&form.title);
            sprint.goal = Some(form.goal.clone());
            sprint.start_date = form.start_date;
            sprint.end_date = form.end_date;
            sprint.is_activate = true;
            Ok(sprint.clone())
        })
    }

    async fn complete_sprint(&self, project_id: i64, sprint_id: i64) -> BackendResult<Sprint> {
        self.mutate(format!("complete_sprint {project_id} {sprint_id}"), |s| {
            let sprint = s
                .sprints
                .iter_mut()
                .find(|sprint| sprint.id == sprint_id)
                .ok_or_else(|| not_found("sprint", sprint_id))?;
            sprint.is_done = true;
            Ok(sprint.clone())
        })
    }

    async fn delete_sprint(&self, project_id: i64, sprint_id: i64) -> BackendResult<()> {
        self.mutate(format!("delete_sprint {project_id} {sprint_id}"), |s| {
            s.sprints.retain(|sprint| sprint.id != sprint_id);
            for item in &mut s.items {
                if item.sprint_id == Some(sprint_id) {
                    item.sprint_id = None;
                }
            }
            Ok(())
        })
    }
}

async fn selected_session() -> ProjectSession<FakeBackend> {
    let mut session = ProjectSession::new(FakeBackend::seeded());
    session.select(ProjectContext::new(1)).await.unwrap();
    session.backend().clear_calls();
    session
}

fn form() -> SprintForm {
    SprintForm {
        title: "Sprint 2".into(),
        goal: "Polish".into(),
        start_date: NaiveDate::from_ymd_opt(2024, 12, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 12, 14),
    }
}

#[tokio::test]
async fn select_loads_project_snapshot() {
    let mut session = ProjectSession::new(FakeBackend::seeded());
    let snapshot = session.select(ProjectContext::new(1)).await.unwrap();

    let ids: Vec<i64> = snapshot.items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(snapshot.sprints.len(), 2);

    let view = snapshot.view(ViewFilter::all());
    assert_eq!(view.backlog.len(), 1);
    assert_eq!(view.pane(5).unwrap().items.len(), 1);
}

#[tokio::test]
async fn dispatch_without_project_fails() {
    let mut session = ProjectSession::new(FakeBackend::seeded());
    let err = session
        .dispatch(&BoardCommand::CreateSprint)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NoProjectSelected));
    assert!(matches!(
        session.refresh().await,
        Err(ClientError::NoProjectSelected)
    ));
    assert!(session.backend().calls().is_empty());
}

#[tokio::test]
async fn move_sends_update_then_refetches() {
    let mut session = selected_session().await;
    let snapshot = session
        .dispatch(&MoveToSprintCommand::to_sprint(1, 6).into())
        .await
        .unwrap();

    assert_eq!(snapshot.item(1).unwrap().sprint_id, Some(6));
    assert_eq!(
        session.backend().calls(),
        vec!["update_item 1 1", "list_items 1", "list_sprints 1"]
    );
}

#[tokio::test]
async fn rejected_command_sends_nothing() {
    let mut session = selected_session().await;
    let before = session.snapshot().cloned();

    let err = session
        .dispatch(&MoveToSprintCommand::to_sprint(999, 5).into())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Core(CoreError::NotFound { id: 999, .. })
    ));
    assert!(session.backend().calls().is_empty());
    assert_eq!(session.snapshot().cloned(), before);
}

#[tokio::test]
async fn failed_mutation_keeps_snapshot() {
    let mut session = selected_session().await;
    let before = session.snapshot().cloned();
    session.backend().set_fail_mutations(true);

    let err = session
        .dispatch(&BoardCommand::ChangeStatus {
            item_id: 1,
            status: ItemStatus::Done,
        })
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(session.snapshot().cloned(), before);
    assert_eq!(session.backend().calls(), vec!["update_item 1 1"]);
}

#[tokio::test]
async fn sprint_lifecycle_round_trip() {
    let mut session = selected_session().await;

    session
        .dispatch(&BoardCommand::StartSprint {
            sprint_id: 6,
            form: form(),
        })
        .await
        .unwrap();
    let phase = session.snapshot().unwrap().sprint(6).unwrap().phase();
    assert_eq!(phase, SprintPhase::Active);

    let snapshot = session
        .dispatch(&BoardCommand::CompleteSprint { sprint_id: 6 })
        .await
        .unwrap();
    assert_eq!(snapshot.sprint(6).unwrap().phase(), SprintPhase::Completed);
    assert!(snapshot.view(ViewFilter::all()).pane(6).is_none());

    let err = session
        .dispatch(&BoardCommand::CompleteSprint { sprint_id: 6 })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::Core(CoreError::InvalidTransition { .. })
    ));
}

#[tokio::test]
async fn create_and_delete_item() {
    let mut session = selected_session().await;

    let snapshot = session
        .dispatch(&BoardCommand::CreateItem(BacklogCreateRequest::new("New work")))
        .await
        .unwrap();
    let created = snapshot
        .items
        .iter()
        .find(|item| item.title == "New work")
        .map(|item| item.id)
        .unwrap();

    let snapshot = session
        .dispatch(&BoardCommand::DeleteItem { item_id: created })
        .await
        .unwrap();
    assert!(snapshot.item(created).is_err());
}

#[tokio::test]
async fn deleting_sprint_returns_items_to_backlog() {
    let mut session = selected_session().await;
    let snapshot = session
        .dispatch(&BoardCommand::DeleteSprint { sprint_id: 5 })
        .await
        .unwrap();

    assert!(snapshot.sprint(5).is_err());
    let view = snapshot.view(ViewFilter::all());
    assert_eq!(view.backlog.len(), 2);
}

#[tokio::test]
async fn switching_project_discards_previous_snapshot() {
    let mut session = selected_session().await;
    session.backend().set_fail_reads(true);

    assert!(session.select(ProjectContext::new(2)).await.is_err());
    assert!(session.snapshot().is_none());
}

#[tokio::test]
async fn failed_refresh_keeps_snapshot() {
    let mut session = selected_session().await;
    let before = session.snapshot().cloned();
    session.backend().set_fail_reads(true);

    assert!(session.refresh().await.is_err());
    assert_eq!(session.snapshot().cloned(), before);
}

#[tokio::test]
async fn my_tasks_filter_on_snapshot_view() {
    let mut session = selected_session().await;
    let snapshot = session
        .select(ProjectContext::new(1).with_member(7))
        .await
        .unwrap();
    let member_id = snapshot.context.member_id.unwrap();
    let view = snapshot.view(ViewFilter::mine(member_id));

    assert!(view.backlog.is_empty());
    assert_eq!(view.pane(5).unwrap().items.len(), 1);
}
