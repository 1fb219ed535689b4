//! Shared world state for task form BDD scenarios.

use mockable::DefaultClock;
use rstest::fixture;
use taskpad::form::services::TaskEditor;
use taskpad::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{Task, TaskId},
};

/// Editor type used by the BDD world.
pub type TestEditor = TaskEditor<InMemoryTaskStore, DefaultClock>;

/// Scenario world for task form behaviour tests.
pub struct TaskFormWorld {
    pub editor: TestEditor,
    pub snapshot: Option<Vec<Task>>,
    pub edited_id: Option<TaskId>,
}

impl TaskFormWorld {
    /// Creates a world with an empty task list and a closed form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            editor: TaskEditor::new(InMemoryTaskStore::new(), DefaultClock),
            snapshot: None,
            edited_id: None,
        }
    }

    /// Finds the identifier of the first task with the given title.
    pub fn id_for_title(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.editor
            .tasks()
            .iter()
            .find(|task| task.title() == title)
            .map(Task::id)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }
}

impl Default for TaskFormWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskFormWorld {
    TaskFormWorld::default()
}
