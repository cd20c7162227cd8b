use anyhow::Context;
use agile_client::{HttpBackendClient, MemberDirectory, ProjectSession};
use agile_config::AgileConfig;
use agile_core::context::ProjectContext;
use agile_core::entities::Member;
use agile_core::view::ViewFilter;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: AgileConfig,
    pub client: HttpBackendClient,
    project_id: Option<i64>,
}

impl AppContext {
    /// Build the backend client from `config`; `--project` wins over
    /// `general.default_project`.
    pub fn init(config: AgileConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let client = HttpBackendClient::from_config(&config.api)
            .context("failed to initialize backend client")?;
        let project_id = flags.project.or(config.general.default_project);

        Ok(Self {
            config,
            client,
            project_id,
        })
    }

    /// The selected project.
    pub fn project_id(&self) -> anyhow::Result<i64> {
        self.project_id.context(
            "no project selected. Pass --project <id> or set general.default_project \
             (AGILE_GENERAL__DEFAULT_PROJECT)",
        )
    }

    /// Signed-in member id: `general.member_id` when set, otherwise asked of
    /// the backend.
    pub async fn member_id(&self) -> anyhow::Result<i64> {
        if let Some(member_id) = self.config.general.member_id {
            return Ok(member_id);
        }
        let member = self
            .client
            .current_member()
            .await
            .context("failed to resolve the signed-in member")?;
        Ok(member.member_id)
    }

    /// Project context for the selected project; the member is resolved only
    /// when the view is filtered to my items.
    pub async fn project_context(&self, mine: bool) -> anyhow::Result<ProjectContext> {
        let context = ProjectContext::new(self.project_id()?);
        if mine || self.config.general.my_tasks_only {
            return Ok(context.with_member(self.member_id().await?));
        }
        Ok(context)
    }

    /// Open a session on the selected project with its snapshot loaded.
    pub async fn open_session(
        &self,
        mine: bool,
    ) -> anyhow::Result<ProjectSession<HttpBackendClient>> {
        let context = self.project_context(mine).await?;
        let mut session = ProjectSession::new(self.client.clone());
        session
            .select(context)
            .await
            .with_context(|| format!("failed to load project {}", context.project_id))?;
        Ok(session)
    }

    pub async fn members(&self) -> anyhow::Result<Vec<Member>> {
        let project_id = self.project_id()?;
        self.client
            .list_members(project_id)
            .await
            .with_context(|| format!("failed to list members of project {project_id}"))
    }
}

/// "My tasks only" filter for a context that carries a member.
#[must_use]
pub fn view_filter(context: &ProjectContext) -> ViewFilter {
    context.member_id.map_or_else(ViewFilter::all, ViewFilter::mine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_follows_context_member() {
        assert_eq!(view_filter(&ProjectContext::new(3)), ViewFilter::all());
        assert_eq!(
            view_filter(&ProjectContext::new(3).with_member(7)),
            ViewFilter::mine(7)
        );
    }
}
