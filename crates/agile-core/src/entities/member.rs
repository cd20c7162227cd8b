use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A project member, used to display assignees. Read-only on the board.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub member_id: i64,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    #[schemars(with = "String")]
    pub name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}
