//! Error types raised by the pure board model.
//!
//! Transport failures (network, non-success status) belong to `agile-client`;
//! nothing in this crate performs I/O.

use thiserror::Error;

/// Errors that can be raised while deriving views or computing payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An operation referenced an item, sprint or story id that is not in the snapshot.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: i64 },

    /// A label or field value could not be mapped onto the domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A sprint lifecycle transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: i64,
        from: String,
        to: String,
    },
}

impl CoreError {
    pub(crate) fn not_found(entity_type: &str, id: i64) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id,
        }
    }
}
