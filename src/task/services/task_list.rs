//! Service layer for adding, editing, and removing tasks.

use crate::task::{
    domain::{Task, TaskDraft, TaskId},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Whether an edit addressed by identifier touched the store.
///
/// Edits and removals of an absent task are silent no-ops; callers that care
/// can tell the two apart through this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreChange {
    /// The addressed task existed and was changed.
    Applied,
    /// No task had the identifier; nothing changed.
    Ignored,
}

impl StoreChange {
    /// Returns `true` when the store was changed.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Service-level errors for task list operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskListError {
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task list service operations.
pub type TaskListResult<T> = Result<T, TaskListError>;

/// Task list orchestration service.
///
/// Owns its store and clock; the screen holding the service is the only
/// writer.
#[derive(Debug, Clone)]
pub struct TaskListService<S, C>
where
    S: TaskStore,
    C: Clock,
{
    store: S,
    clock: C,
}

impl<S, C> TaskListService<S, C>
where
    S: TaskStore,
    C: Clock,
{
    /// Creates a new task list service.
    #[must_use]
    pub const fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Appends a new task built from the draft and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Store`] when the store rejects the record.
    pub fn add(&mut self, draft: TaskDraft) -> TaskListResult<TaskId> {
        let task = Task::new_from_draft(draft, &self.clock);
        let id = task.id();
        self.store.insert(task)?;
        info!(task_id = %id, total = self.store.len(), "task added");
        Ok(id)
    }

    /// Overwrites the editable fields of the task with the given identifier.
    ///
    /// The task keeps its identifier and its position in the list. An absent
    /// identifier leaves the store untouched.
    pub fn update(&mut self, id: TaskId, draft: TaskDraft) -> StoreChange {
        let Some(mut task) = self.store.find_by_id(id) else {
            debug!(task_id = %id, "update ignored, task not found");
            return StoreChange::Ignored;
        };
        task.apply_draft(draft, &self.clock);
        match self.store.replace(task) {
            Ok(()) => {
                info!(task_id = %id, "task updated");
                StoreChange::Applied
            }
            Err(err) => {
                debug!(task_id = %id, error = %err, "update ignored");
                StoreChange::Ignored
            }
        }
    }

    /// Removes the task with the given identifier.
    ///
    /// There is no confirmation step. An absent identifier leaves the store
    /// untouched.
    pub fn remove(&mut self, id: TaskId) -> StoreChange {
        match self.store.remove(id) {
            Ok(_) => {
                info!(task_id = %id, total = self.store.len(), "task removed");
                StoreChange::Applied
            }
            Err(err) => {
                debug!(task_id = %id, error = %err, "remove ignored");
                StoreChange::Ignored
            }
        }
    }

    /// Returns the task with the given identifier, if present.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<Task> {
        self.store.find_by_id(id)
    }

    /// Returns all tasks in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Task> {
        self.store.list()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` when there are no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
