//! Explicit project/session context passed into every board operation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The selected project and, when known, the signed-in member.
///
/// Replaces any notion of a global "current project": callers build one of
/// these and hand it to the session and the board view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    pub project_id: i64,
    pub member_id: Option<i64>,
}

impl ProjectContext {
    #[must_use]
    pub const fn new(project_id: i64) -> Self {
        Self {
            project_id,
            member_id: None,
        }
    }

    #[must_use]
    pub const fn with_member(mut self, member_id: i64) -> Self {
        self.member_id = Some(member_id);
        self
    }
}
