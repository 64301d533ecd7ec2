//! Domain errors.

use thiserror::Error;

/// Domain error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Push payload without any usable commit identifier.
    #[error("Malformed push payload: {reason}")]
    MalformedPayload { reason: String },

    /// Missing mandatory admin parameter.
    #[error("Invalid input: missing '{field}'")]
    InvalidInput { field: String },

    /// Wraps [`deployhook_state_interface::StateError`].
    #[error("State error: {source}")]
    StateError {
        source: deployhook_state_interface::StateError,
    },
}

impl From<deployhook_state_interface::StateError> for DomainError {
    fn from(e: deployhook_state_interface::StateError) -> Self {
        Self::StateError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
