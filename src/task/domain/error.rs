//! Error types for task domain parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The value is not a valid task identifier.
    #[error("invalid task identifier '{0}'")]
    InvalidTaskId(String),
}
