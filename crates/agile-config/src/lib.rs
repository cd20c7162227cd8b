//! # agile-config
//!
//! Layered configuration loading for the agile board client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AGILE_*` prefix, `__` as separator)
//! 2. Project-level `.agile/config.toml`
//! 3. User-level `~/.config/agile/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AGILE_API__BASE_URL` -> `api.base_url`,
//! `AGILE_GENERAL__DEFAULT_PROJECT` -> `general.default_project`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use agile_config::AgileConfig;
//!
//! let config = AgileConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory (relative to the working directory) holding project-local config.
pub const PROJECT_DIR: &str = ".agile";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AgileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AgileConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain rooted at the current directory.
    pub fn figment() -> Figment {
        Self::figment_at(Path::new("."))
    }

    /// Build the figment provider chain with project config read from
    /// `project_root/.agile/config.toml`.
    pub fn figment_at(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("AGILE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("agile").join("config.toml"))
    }
}
