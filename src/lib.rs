//! Taskpad: state core of a single-screen task list.
//!
//! This crate holds an in-memory list of tasks (title, description, optional
//! image) and the modal entry form used to create and edit them. Rendering
//! and the platform image picker stay outside the crate; the presentation
//! layer reads render models and feeds user intents back in.
//!
//! # Architecture
//!
//! Taskpad follows hexagonal architecture principles:
//!
//! - **Domain**: Pure state and transitions with no platform dependencies
//! - **Ports**: Abstract trait interfaces for storage and image picking
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task records and the ordered task list
//! - [`form`]: Entry form session and the editor driving it
//! - [`view`]: Render models for the screen
//!
//! # Example
//!
//! ```
//! use taskpad::form::services::TaskEditor;
//! use taskpad::task::adapters::memory::InMemoryTaskStore;
//! use taskpad::view::ScreenView;
//! use mockable::DefaultClock;
//!
//! let mut editor = TaskEditor::new(InMemoryTaskStore::new(), DefaultClock);
//! editor.open_create();
//! editor.set_title("Buy milk").expect("form is open");
//! let id = editor.commit().expect("commit succeeds").task_id();
//!
//! editor.open_edit(id).expect("task exists");
//! let view = ScreenView::from_editor(&editor);
//! assert_eq!(view.form.map(|form| form.heading), Some("Edit Task"));
//! ```

pub mod form;
pub mod task;
pub mod view;
