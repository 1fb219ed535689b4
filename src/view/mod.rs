//! Render models for the task screen.
//!
//! Everything the presentation layer needs to draw the list and the entry
//! form, derived from a [`TaskEditor`](crate::form::services::TaskEditor)
//! without further interpretation.

mod screen;

pub use screen::{Avatar, FormView, ScreenView, TaskRow};
