//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// An operation was triggered before the step that makes it valid.
    #[error("invalid state: {0}")]
    InvalidState(String),
}
