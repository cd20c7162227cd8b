//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    "table".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Project used when `--project` is not given.
    #[serde(default)]
    pub default_project: Option<i64>,

    /// Signed-in member id. When unset, the CLI asks the backend (`GET /members`).
    #[serde(default)]
    pub member_id: Option<i64>,

    /// Start the board in "my tasks only" mode.
    #[serde(default)]
    pub my_tasks_only: bool,

    /// Output format when `--format` is not given: `json`, `table` or `raw`.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_project: None,
            member_id: None,
            my_tasks_only: false,
            default_format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.default_project.is_none());
        assert!(config.member_id.is_none());
        assert!(!config.my_tasks_only);
        assert_eq!(config.default_format, "table");
    }
}
