//! Entity structs for the board's domain objects.
//!
//! Each entity mirrors a payload of the backend REST API. Keys are camelCase
//! on the wire; the backend's `backlogId` / `storyId` / `projectId` keys map onto `id`.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod backlog_item;
mod burndown;
mod member;
mod project;
mod sprint;
mod story;

pub use backlog_item::{BacklogItem, Membership};
pub use burndown::{BurndownEntry, burndown_series};
pub use member::Member;
pub use project::Project;
pub use sprint::Sprint;
pub use story::Story;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
