//! Editor tying the entry form to the task list.

use crate::form::{
    domain::{DraftField, FormSession, FormSessionError, PendingCommit},
    ports::{ImagePicker, ImagePickerConfig},
};
use crate::task::{
    domain::{ImageRef, Task, TaskId},
    ports::TaskStore,
    services::{StoreChange, TaskListError, TaskListService},
};
use mockable::Clock;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Store change made by a committed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommitOutcome {
    /// A new task was appended.
    Created {
        /// Identifier of the new task.
        id: TaskId,
    },
    /// An existing task was overwritten, or ignored if it had been removed
    /// while the form was open.
    Updated {
        /// Identifier of the edited task.
        id: TaskId,
        /// Whether the task was still present.
        change: StoreChange,
    },
}

impl CommitOutcome {
    /// Returns the identifier of the created or edited task.
    #[must_use]
    pub const fn task_id(self) -> TaskId {
        match self {
            Self::Created { id } | Self::Updated { id, .. } => id,
        }
    }
}

/// Errors returned by editor operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskEditorError {
    /// The form was not in a state that accepts the input.
    #[error(transparent)]
    Session(#[from] FormSessionError),
    /// The task list rejected the change.
    #[error(transparent)]
    TaskList(#[from] TaskListError),
    /// No task has the identifier an edit was requested for.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// Result type for editor operations.
pub type TaskEditorResult<T> = Result<T, TaskEditorError>;

/// Drives the entry form against the task list.
///
/// # Examples
///
/// ```
/// use taskpad::form::services::TaskEditor;
/// use taskpad::task::adapters::memory::InMemoryTaskStore;
/// use mockable::DefaultClock;
///
/// let mut editor = TaskEditor::new(InMemoryTaskStore::new(), DefaultClock);
/// editor.open_create();
/// editor.set_title("Buy milk").expect("form is open");
/// editor.set_description("2%").expect("form is open");
/// editor.commit().expect("commit succeeds");
///
/// let tasks = editor.tasks();
/// assert_eq!(tasks.len(), 1);
/// assert!(!editor.session().is_open());
/// ```
#[derive(Debug, Clone)]
pub struct TaskEditor<S, C>
where
    S: TaskStore,
    C: Clock,
{
    tasks: TaskListService<S, C>,
    session: FormSession,
    picker_config: ImagePickerConfig,
}

impl<S, C> TaskEditor<S, C>
where
    S: TaskStore,
    C: Clock,
{
    /// Creates an editor with a closed form over the given store.
    #[must_use]
    pub fn new(store: S, clock: C) -> Self {
        Self::from_service(TaskListService::new(store, clock))
    }

    /// Creates an editor with a closed form over an existing task list.
    #[must_use]
    pub fn from_service(tasks: TaskListService<S, C>) -> Self {
        Self {
            tasks,
            session: FormSession::new(),
            picker_config: ImagePickerConfig::default(),
        }
    }

    /// Replaces the options handed to the image picker.
    #[must_use]
    pub const fn with_picker_config(mut self, config: ImagePickerConfig) -> Self {
        self.picker_config = config;
        self
    }

    /// Returns the image picker options.
    #[must_use]
    pub const fn picker_config(&self) -> &ImagePickerConfig {
        &self.picker_config
    }

    /// Returns the form session.
    #[must_use]
    pub const fn session(&self) -> &FormSession {
        &self.session
    }

    /// Returns the underlying task list.
    #[must_use]
    pub const fn task_list(&self) -> &TaskListService<S, C> {
        &self.tasks
    }

    /// Returns all tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.list()
    }

    /// Opens an empty form for a new task.
    pub fn open_create(&mut self) {
        self.session.open_create();
    }

    /// Opens the form pre-filled with the task's fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::TaskNotFound`] when no task has the
    /// identifier. The form is left as it was.
    pub fn open_edit(&mut self, id: TaskId) -> TaskEditorResult<()> {
        let task = self
            .tasks
            .find(id)
            .ok_or(TaskEditorError::TaskNotFound(id))?;
        self.session.open_edit(&task);
        Ok(())
    }

    /// Sets one text field of the draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::Session`] when the form is closed.
    pub fn set_field(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> TaskEditorResult<()> {
        Ok(self.session.set_field(field, value)?)
    }

    /// Sets the draft title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::Session`] when the form is closed.
    pub fn set_title(&mut self, title: impl Into<String>) -> TaskEditorResult<()> {
        self.set_field(DraftField::Title, title)
    }

    /// Sets the draft description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::Session`] when the form is closed.
    pub fn set_description(&mut self, description: impl Into<String>) -> TaskEditorResult<()> {
        self.set_field(DraftField::Description, description)
    }

    /// Attaches an image to the draft, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::Session`] when the form is closed.
    pub fn set_image(&mut self, image: ImageRef) -> TaskEditorResult<()> {
        Ok(self.session.set_image(image)?)
    }

    /// Removes the draft image.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::Session`] when the form is closed.
    pub fn clear_image(&mut self) -> TaskEditorResult<()> {
        Ok(self.session.clear_image()?)
    }

    /// Asks the picker for an image and attaches it to the draft.
    ///
    /// Returns the attached image, or `None` when the user cancelled the
    /// picker, in which case the draft is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::Session`] when the form is closed; the
    /// picker is not invoked.
    pub fn pick_image(
        &mut self,
        picker: &impl ImagePicker,
    ) -> TaskEditorResult<Option<ImageRef>> {
        if !self.session.is_open() {
            return Err(FormSessionError::NotOpen.into());
        }
        let Some(picked) = picker.pick(&self.picker_config) else {
            debug!("image picker cancelled");
            return Ok(None);
        };
        let image = ImageRef::from(picked);
        self.session.set_image(image.clone())?;
        Ok(Some(image))
    }

    /// Applies the draft to the task list and closes the form.
    ///
    /// In create mode the draft becomes a new task; in edit mode it
    /// overwrites the edited task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::Session`] when the form is closed, or
    /// [`TaskEditorError::TaskList`] when the task list rejects the new task.
    /// The form is closed either way.
    pub fn commit(&mut self) -> TaskEditorResult<CommitOutcome> {
        let outcome = match self.session.take_commit()? {
            PendingCommit::Create(draft) => CommitOutcome::Created {
                id: self.tasks.add(draft)?,
            },
            PendingCommit::Update { id, draft } => CommitOutcome::Updated {
                id,
                change: self.tasks.update(id, draft),
            },
        };
        info!(task_id = %outcome.task_id(), "task form committed");
        Ok(outcome)
    }

    /// Closes the form without touching the task list.
    pub fn cancel(&mut self) {
        self.session.close();
    }

    /// Removes a task immediately. The form is not involved.
    pub fn delete(&mut self, id: TaskId) -> StoreChange {
        self.tasks.remove(id)
    }
}
