use agile_client::BackendClient;
use agile_core::entities::{BacklogItem, Story};
use agile_core::model::derive_story_status;
use agile_core::requests::StoryRequest;
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StoryCommands;
use crate::context::AppContext;
use crate::output::{output, output_rows};

/// Handle `agl story`.
pub async fn handle(
    action: &StoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let project_id = ctx.project_id()?;
    match action {
        StoryCommands::List => {
            let (stories, items) = tokio::try_join!(
                ctx.client.list_stories(project_id),
                ctx.client.list_backlog_items(project_id),
            )
            .with_context(|| format!("failed to list stories of project {project_id}"))?;
            let stories = with_derived_status(stories, &items);
            let rows = stories
                .iter()
                .map(|story| {
                    vec![
                        story.id.to_string(),
                        story.title.clone(),
                        story.status.map_or("-", |status| status.label()).to_string(),
                        items
                            .iter()
                            .filter(|item| item.story_id == Some(story.id))
                            .count()
                            .to_string(),
                    ]
                })
                .collect::<Vec<_>>();
            output_rows(&stories, &["id", "title", "status", "items"], &rows, flags.format)
        }
        StoryCommands::Create { title, description } => {
            let request = story_request(title, description.as_deref())?;
            let story = ctx.client.create_story(project_id, &request).await?;
            output(&story, flags.format)
        }
        StoryCommands::Update {
            id,
            title,
            description,
        } => {
            let request = story_request(title, description.as_deref())?;
            let story = ctx.client.update_story(project_id, *id, &request).await?;
            output(&story, flags.format)
        }
        StoryCommands::Delete { id } => {
            ctx.client.delete_story(project_id, *id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}

fn story_request(title: &str, description: Option<&str>) -> anyhow::Result<StoryRequest> {
    let request = StoryRequest {
        title: title.to_string(),
        description: description.unwrap_or_default().to_string(),
    };
    request.validate()?;
    Ok(request)
}

/// Fill in the status of stories the backend sent without one.
///
/// The listed items omit finished work in completed sprints, so a status the
/// backend already computed always wins.
fn with_derived_status(stories: Vec<Story>, items: &[BacklogItem]) -> Vec<Story> {
    stories
        .into_iter()
        .map(|story| Story {
            status: story
                .status
                .or_else(|| Some(derive_story_status(items, story.id))),
            ..story
        })
        .collect()
}
