//! Backend API connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "https://api.agilementor.kr".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("agile-board/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend origin, without the `/api` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Raw `Cookie` header value carrying the backend session
    /// (for example `JSESSIONID=...`). Obtaining it is left to the browser login.
    #[serde(default)]
    pub session_cookie: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            session_cookie: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Whether requests will carry a session cookie.
    pub fn is_configured(&self) -> bool {
        !self.session_cookie.is_empty()
    }

    /// `base_url` with any trailing slash removed and `/api` appended.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] unless the URL starts with
    /// `http://` or `https://`.
    pub fn api_root(&self) -> Result<String, ConfigError> {
        let base = self.base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        Ok(format!("{base}/api"))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero timeout.
    pub fn timeout(&self) -> Result<std::time::Duration, ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(std::time::Duration::from_secs(self.timeout_secs))
    }
}
