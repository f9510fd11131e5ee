//! Error types for MOREDENT.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Common error type for MOREDENT operations.
#[derive(Error, Debug)]
pub enum MoredentError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persistence error while writing a board store.
    #[error("storage error: {0}")]
    Storage(String),

    /// Validation error for user input, carrying per-field detail.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Holiday source unreachable or its response malformed.
    ///
    /// This is the only error class the core lets bubble up unhandled:
    /// it is not retried and not silently swallowed.
    #[error("holiday API error: {0}")]
    Holiday(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for MOREDENT operations.
pub type Result<T> = std::result::Result<T, MoredentError>;
