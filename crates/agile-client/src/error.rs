//! Client error types.

use agile_core::errors::CoreError;
use thiserror::Error;

/// Errors raised while talking to the backend or dispatching board commands.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connection refused, timeout, TLS).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body text.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// A command was rejected by the board model before any request was sent.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Client configuration is unusable (bad base URL, bad cookie header).
    #[error("configuration error: {0}")]
    Config(String),

    /// A session operation needs a selected project.
    #[error("no project selected")]
    NoProjectSelected,
}

impl ClientError {
    /// The backend rejected the session cookie.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Server { status: 401 | 403, .. })
    }

    /// Status code when this is a [`ClientError::Server`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<agile_config::ConfigError> for ClientError {
    fn from(err: agile_config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
