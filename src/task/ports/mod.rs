//! Port contracts for the task list.
//!
//! Ports define storage-agnostic interfaces used by task services.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
