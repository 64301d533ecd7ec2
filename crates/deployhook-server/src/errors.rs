//! Server errors.

use thiserror::Error;

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {source}")]
    IoError { source: std::io::Error },
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;
