//! Error types for form session transitions.

use thiserror::Error;

/// Errors returned for inputs that need an open form.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormSessionError {
    /// The form is closed, so there is no draft to edit or commit.
    #[error("the task form is not open")]
    NotOpen,
}
