use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemStatus;

/// A user story grouping related backlog items.
///
/// `status` is computed by the backend from the story's items and is absent
/// on create/update responses.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    #[serde(rename = "storyId", alias = "id")]
    pub id: i64,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    #[schemars(with = "String")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    #[schemars(with = "String")]
    pub description: String,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub status: Option<ItemStatus>,
}
