//! Application services for the entry form.

mod editor;

pub use editor::{CommitOutcome, TaskEditor, TaskEditorError, TaskEditorResult};
