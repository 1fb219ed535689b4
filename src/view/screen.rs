//! Screen, row, and form render models.

use crate::form::{
    domain::{FormMode, FormSession},
    services::TaskEditor,
};
use crate::task::{
    domain::{ImageRef, Task, TaskDraft, TaskId},
    ports::TaskStore,
};
use mockable::Clock;
use serde::Serialize;

const SCREEN_HEADER: &str = "ToDo Task List";
const CREATE_LABEL: &str = "Add Task";
const EDIT_HEADING: &str = "Edit Task";
const UPDATE_LABEL: &str = "Update Task";
const CANCEL_LABEL: &str = "Cancel";
const TITLE_PLACEHOLDER: &str = "Title";
const DESCRIPTION_PLACEHOLDER: &str = "Description";

/// Image shown for a task or a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Avatar {
    /// The attached image.
    Image {
        /// Image locator.
        uri: String,
    },
    /// The bundled default picture.
    Placeholder,
}

impl From<Option<&ImageRef>> for Avatar {
    fn from(image: Option<&ImageRef>) -> Self {
        image.map_or(Self::Placeholder, |found| Self::Image {
            uri: found.uri().to_owned(),
        })
    }
}

/// One row of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    /// Row key, also the target of the row's edit and delete actions.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Task picture.
    pub avatar: Avatar,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            avatar: Avatar::from(task.image()),
        }
    }
}

/// The visible entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    /// Form heading.
    pub heading: &'static str,
    /// Label of the commit button.
    pub submit_label: &'static str,
    /// Label of the cancel button.
    pub cancel_label: &'static str,
    /// Hint shown in the empty title input.
    pub title_placeholder: &'static str,
    /// Hint shown in the empty description input.
    pub description_placeholder: &'static str,
    /// Current title input.
    pub title: String,
    /// Current description input.
    pub description: String,
    /// Image preview; the placeholder doubles as the picker trigger.
    pub preview: Avatar,
}

impl FormView {
    /// Builds the form view for an open session; `None` when closed.
    #[must_use]
    pub fn from_session(session: &FormSession) -> Option<Self> {
        let FormSession::Open { mode, draft } = session else {
            return None;
        };
        Some(Self::new(*mode, draft))
    }

    fn new(mode: FormMode, draft: &TaskDraft) -> Self {
        let (heading, submit_label) = match mode {
            FormMode::Create => (CREATE_LABEL, CREATE_LABEL),
            FormMode::Edit(_) => (EDIT_HEADING, UPDATE_LABEL),
        };
        Self {
            heading,
            submit_label,
            cancel_label: CANCEL_LABEL,
            title_placeholder: TITLE_PLACEHOLDER,
            description_placeholder: DESCRIPTION_PLACEHOLDER,
            title: draft.title.clone(),
            description: draft.description.clone(),
            preview: Avatar::from(draft.image.as_ref()),
        }
    }
}

/// Whole-screen render model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    /// Screen header text.
    pub header: &'static str,
    /// Task rows in list order.
    pub rows: Vec<TaskRow>,
    /// The entry form, present while it is open.
    pub form: Option<FormView>,
}

impl ScreenView {
    /// Captures the current screen state of an editor.
    #[must_use]
    pub fn from_editor<S, C>(editor: &TaskEditor<S, C>) -> Self
    where
        S: TaskStore,
        C: Clock,
    {
        Self {
            header: SCREEN_HEADER,
            rows: editor.tasks().iter().map(TaskRow::from).collect(),
            form: FormView::from_session(editor.session()),
        }
    }

    /// Serialises the view for a presentation layer across a JSON boundary.
    ///
    /// # Errors
    ///
    /// Returns the serialisation error from `serde_json`.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
