use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A project the signed-in member belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "projectId", alias = "id")]
    pub id: i64,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    #[schemars(with = "String")]
    pub title: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_keys() {
        let project: Project =
            serde_json::from_str(r#"{"projectId": 3, "title": "Mentor", "isAdmin": true}"#).unwrap();
        assert_eq!(project.id, 3);
        assert!(project.is_admin);

        let project: Project = serde_json::from_str(r#"{"id": 4, "title": null}"#).unwrap();
        assert_eq!(project.title, "");
        assert!(!project.is_admin);
    }
}
