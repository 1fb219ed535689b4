//! In-memory store holding the task list for the lifetime of a screen.

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Insertion-ordered in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Vec<Task>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl TaskStore for InMemoryTaskStore {
    fn insert(&mut self, task: Task) -> TaskStoreResult<()> {
        if self.position(task.id()).is_some() {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }
        self.tasks.push(task);
        Ok(())
    }

    fn replace(&mut self, task: Task) -> TaskStoreResult<()> {
        let id = task.id();
        let slot = self
            .tasks
            .iter_mut()
            .find(|stored| stored.id() == id)
            .ok_or(TaskStoreError::NotFound(id))?;
        *slot = task;
        Ok(())
    }

    fn remove(&mut self, id: TaskId) -> TaskStoreResult<Task> {
        let index = self.position(id).ok_or(TaskStoreError::NotFound(id))?;
        // `Vec::remove` shifts the tail left, keeping relative order.
        Ok(self.tasks.remove(index))
    }

    fn find_by_id(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id() == id).cloned()
    }

    fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}
