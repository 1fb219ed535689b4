//! Store port for ordered task records.

use crate::task::domain::{Task, TaskId};
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Ordered task storage contract.
///
/// Implementations keep records in insertion order. Replacing a record never
/// moves it.
pub trait TaskStore {
    /// Appends a new task at the end of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the task ID already
    /// exists.
    fn insert(&mut self, task: Task) -> TaskStoreResult<()>;

    /// Replaces the stored task that has the same identifier, in place.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    fn replace(&mut self, task: Task) -> TaskStoreResult<()>;

    /// Removes and returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    fn remove(&mut self, id: TaskId) -> TaskStoreResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    fn find_by_id(&self, id: TaskId) -> Option<Task>;

    /// Returns a snapshot of all tasks in insertion order.
    fn list(&self) -> Vec<Task>;

    /// Returns the number of stored tasks.
    fn len(&self) -> usize;

    /// Returns `true` when the store holds no tasks.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}
