//! REST implementation of the backend seams.

use agile_config::ApiConfig;
use agile_core::entities::{BacklogItem, BurndownEntry, Member, Project, Sprint, Story};
use agile_core::requests::{BacklogCreateRequest, BacklogUpdateRequest, SprintForm, StoryRequest};
use reqwest::Method;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::{BackendClient, BackendResult, MemberDirectory};
use crate::error::ClientError;
use crate::http::{check_response, decode};

/// HTTP client for the board backend.
///
/// Paths are resolved against `{base_url}/api`. The configured session cookie
/// is attached to every request.
#[derive(Debug, Clone)]
pub struct HttpBackendClient {
    http: reqwest::Client,
    api_root: String,
}

impl HttpBackendClient {
    /// Client for `base_url` with default timeout and no session cookie.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for a non-http(s) URL, or
    /// [`ClientError::Network`] if the underlying client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the base URL, timeout or cookie is
    /// unusable, or [`ClientError::Network`] if the client fails to build.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        if config.is_configured() {
            let cookie = HeaderValue::from_str(config.session_cookie.trim())
                .map_err(|e| ClientError::Config(format!("api.session_cookie: {e}")))?;
            headers.insert(COOKIE, cookie);
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout()?)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_root: config.api_root()?,
        })
    }

    /// Root every request path is appended to (ends in `/api`).
    #[must_use]
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_root)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> BackendResult<T> {
        let url = self.url(path);
        tracing::debug!(method = "GET", %url, "backend request");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode(resp).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> BackendResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%method, %url, "backend request");
        let resp = check_response(self.http.request(method, &url).json(body).send().await?).await?;
        decode(resp).await
    }

    async fn delete(&self, path: &str) -> BackendResult<()> {
        let url = self.url(path);
        tracing::debug!(method = "DELETE", %url, "backend request");
        check_response(self.http.delete(&url).send().await?).await?;
        Ok(())
    }

    /// Items of the project's active sprints.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn list_active_backlog_items(&self, project_id: i64) -> BackendResult<Vec<BacklogItem>> {
        self.get(&format!("/projects/{project_id}/backlogs/active")).await
    }

    /// # Errors
    ///
    /// See [`Self::list_active_backlog_items`].
    pub async fn get_sprint(&self, project_id: i64, sprint_id: i64) -> BackendResult<Sprint> {
        self.get(&format!("/projects/{project_id}/sprints/{sprint_id}"))
            .await
    }

    /// Completed-sprint history of a project, oldest first.
    ///
    /// # Errors
    ///
    /// See [`Self::list_active_backlog_items`].
    pub async fn burndown(&self, project_id: i64) -> BackendResult<Vec<BurndownEntry>> {
        self.get(&format!("/projects/{project_id}/sprints/burndown"))
            .await
    }

    /// Projects the signed-in member has joined.
    ///
    /// # Errors
    ///
    /// See [`Self::list_active_backlog_items`].
    pub async fn list_projects(&self) -> BackendResult<Vec<Project>> {
        self.get("/projects").await
    }

    /// In-progress items assigned to the signed-in member, across projects.
    ///
    /// # Errors
    ///
    /// See [`Self::list_active_backlog_items`].
    pub async fn my_tasks(&self) -> BackendResult<Vec<BacklogItem>> {
        self.get("/tasks").await
    }

    /// # Errors
    ///
    /// See [`Self::list_active_backlog_items`].
    pub async fn list_stories(&self, project_id: i64) -> BackendResult<Vec<Story>> {
        self.get(&format!("/projects/{project_id}/stories")).await
    }

    /// # Errors
    ///
    /// See [`Self::list_active_backlog_items`].
    pub async fn create_story(&self, project_id: i64, request: &StoryRequest) -> BackendResult<Story> {
        self.send_json(Method::POST, &format!("/projects/{project_id}/stories"), request)
            .await
    }

    /// # Errors
    ///
    /// See [`Self::list_active_backlog_items`].
    pub async fn update_story(
        &self,
        project_id: i64,
        story_id: i64,
        request: &StoryRequest,
    ) -> BackendResult<Story> {
        self.send_json(
            Method::PUT,
            &format!("/projects/{project_id}/stories/{story_id}"),
            request,
        )
        .await
    }

    /// # Errors
    ///
    /// See [`Self::list_active_backlog_items`].
    pub async fn delete_story(&self, project_id: i64, story_id: i64) -> BackendResult<()> {
        self.delete(&format!("/projects/{project_id}/stories/{story_id}"))
            .await
    }
}

impl BackendClient for HttpBackendClient {
    async fn list_backlog_items(&self, project_id: i64) -> BackendResult<Vec<BacklogItem>> {
        self.get(&format!("/projects/{project_id}/backlogs")).await
    }

    async fn get_backlog_item(&self, project_id: i64, item_id: i64) -> BackendResult<BacklogItem> {
        self.get(&format!("/projects/{project_id}/backlogs/{item_id}"))
            .await
    }

    async fn create_backlog_item(
        &self,
        project_id: i64,
        request: &BacklogCreateRequest,
    ) -> BackendResult<BacklogItem> {
        self.send_json(Method::POST, &format!("/projects/{project_id}/backlogs"), request)
            .await
    }

    async fn update_backlog_item(
        &self,
        project_id: i64,
        item_id: i64,
        request: &BacklogUpdateRequest,
    ) -> BackendResult<BacklogItem> {
        self.send_json(
            Method::PUT,
            &format!("/projects/{project_id}/backlogs/{item_id}"),
            request,
        )
        .await
    }

    async fn delete_backlog_item(&self, project_id: i64, item_id: i64) -> BackendResult<()> {
        self.delete(&format!("/projects/{project_id}/backlogs/{item_id}"))
            .await
    }

    async fn list_sprints(&self, project_id: i64) -> BackendResult<Vec<Sprint>> {
        self.get(&format!("/projects/{project_id}/sprints")).await
    }

    async fn create_sprint(&self, project_id: i64) -> BackendResult<Sprint> {
        self.send_json(
            Method::POST,
            &format!("/projects/{project_id}/sprints"),
            &serde_json::json!({}),
        )
        .await
    }

    async fn update_sprint(
        &self,
        project_id: i64,
        sprint_id: i64,
        form: &SprintForm,
    ) -> BackendResult<Sprint> {
        self.send_json(
            Method::PUT,
            &format!("/projects/{project_id}/sprints/{sprint_id}"),
            form,
        )
        .await
    }

    async fn start_sprint(
        &self,
        project_id: i64,
        sprint_id: i64,
        form: &SprintForm,
    ) -> BackendResult<Sprint> {
        self.send_json(
            Method::PUT,
            &format!("/projects/{project_id}/sprints/{sprint_id}/start"),
            form,
        )
        .await
    }

    async fn complete_sprint(&self, project_id: i64, sprint_id: i64) -> BackendResult<Sprint> {
        self.send_json(
            Method::PUT,
            &format!("/projects/{project_id}/sprints/{sprint_id}/complete"),
            &serde_json::json!({}),
        )
        .await
    }

    async fn delete_sprint(&self, project_id: i64, sprint_id: i64) -> BackendResult<()> {
        self.delete(&format!("/projects/{project_id}/sprints/{sprint_id}"))
            .await
    }
}

impl MemberDirectory for HttpBackendClient {
    async fn list_members(&self, project_id: i64) -> BackendResult<Vec<Member>> {
        self.get(&format!("/projects/{project_id}/members")).await
    }

    async fn current_member(&self) -> BackendResult<Member> {
        self.get("/members").await
    }
}
