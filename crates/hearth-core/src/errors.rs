//! Cross-cutting error types for Hearth.
//!
//! The classifier itself is total and never returns an error; these errors come
//! from board transitions and form validation.

use thiserror::Error;

/// Errors that can be raised by any Hearth crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (missing fields, out-of-range positions).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
