//! Form session state machine.

use super::FormSessionError;
use crate::task::domain::{ImageRef, Task, TaskDraft, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// What committing the open form will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "task_id", rename_all = "snake_case")]
pub enum FormMode {
    /// Commit appends a new task.
    Create,
    /// Commit overwrites the task with this identifier.
    Edit(TaskId),
}

impl FormMode {
    /// Returns the edited task identifier in edit mode.
    #[must_use]
    pub const fn editing_id(self) -> Option<TaskId> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

/// Text field of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    /// The task title.
    Title,
    /// The task description.
    Description,
}

impl DraftField {
    /// Returns the field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store change requested by a committed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingCommit {
    /// Append the draft as a new task.
    Create(TaskDraft),
    /// Overwrite the fields of an existing task.
    Update {
        /// Task being edited.
        id: TaskId,
        /// Replacement fields.
        draft: TaskDraft,
    },
}

/// Entry form session.
///
/// The form is visible exactly when the session is [`FormSession::Open`].
/// Both commit and cancel return it to [`FormSession::Closed`], discarding
/// the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormSession {
    /// The form is hidden and holds no draft.
    #[default]
    Closed,
    /// The form is visible.
    Open {
        /// Create or edit.
        mode: FormMode,
        /// Uncommitted field values.
        draft: TaskDraft,
    },
}

impl FormSession {
    /// Creates a closed session.
    #[must_use]
    pub const fn new() -> Self {
        Self::Closed
    }

    /// Opens the form with an empty draft in create mode.
    ///
    /// An already open form is reinitialised.
    pub fn open_create(&mut self) {
        *self = Self::Open {
            mode: FormMode::Create,
            draft: TaskDraft::default(),
        };
        debug!(mode = "create", "task form opened");
    }

    /// Opens the form in edit mode with a copy of the task's fields.
    ///
    /// An already open form is reinitialised.
    pub fn open_edit(&mut self, task: &Task) {
        *self = Self::Open {
            mode: FormMode::Edit(task.id()),
            draft: task.to_draft(),
        };
        debug!(mode = "edit", task_id = %task.id(), "task form opened");
    }

    /// Returns `true` while the form is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Returns the mode of the open form.
    #[must_use]
    pub const fn mode(&self) -> Option<FormMode> {
        match self {
            Self::Open { mode, .. } => Some(*mode),
            Self::Closed => None,
        }
    }

    /// Returns the draft of the open form.
    #[must_use]
    pub const fn draft(&self) -> Option<&TaskDraft> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    /// Sets one text field of the draft.
    ///
    /// # Errors
    ///
    /// Returns [`FormSessionError::NotOpen`] when the form is closed.
    pub fn set_field(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), FormSessionError> {
        let draft = self.draft_mut()?;
        let slot = match field {
            DraftField::Title => &mut draft.title,
            DraftField::Description => &mut draft.description,
        };
        *slot = value.into();
        Ok(())
    }

    /// Attaches an image to the draft, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`FormSessionError::NotOpen`] when the form is closed.
    pub fn set_image(&mut self, image: ImageRef) -> Result<(), FormSessionError> {
        self.draft_mut()?.image = Some(image);
        Ok(())
    }

    /// Removes the draft image so the placeholder is shown.
    ///
    /// # Errors
    ///
    /// Returns [`FormSessionError::NotOpen`] when the form is closed.
    pub fn clear_image(&mut self) -> Result<(), FormSessionError> {
        self.draft_mut()?.image = None;
        Ok(())
    }

    /// Closes the form and returns the store change the commit requests.
    ///
    /// # Errors
    ///
    /// Returns [`FormSessionError::NotOpen`] when the form is closed.
    pub fn take_commit(&mut self) -> Result<PendingCommit, FormSessionError> {
        self.close().ok_or(FormSessionError::NotOpen)
    }

    /// Closes the form, handing back what a commit would have applied.
    ///
    /// This is the only reset path; commit and cancel both go through it.
    /// Returns `None` when the form was already closed.
    pub fn close(&mut self) -> Option<PendingCommit> {
        let Self::Open { mode, draft } = std::mem::take(self) else {
            return None;
        };
        debug!("task form closed");
        Some(match mode {
            FormMode::Create => PendingCommit::Create(draft),
            FormMode::Edit(id) => PendingCommit::Update { id, draft },
        })
    }

    const fn draft_mut(&mut self) -> Result<&mut TaskDraft, FormSessionError> {
        match self {
            Self::Open { draft, .. } => Ok(draft),
            Self::Closed => Err(FormSessionError::NotOpen),
        }
    }
}
