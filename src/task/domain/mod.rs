//! Domain model for the task list.
//!
//! Task records, their editable field set, and image references. The domain
//! carries no storage or presentation concerns.

mod error;
mod ids;
mod image;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use image::ImageRef;
pub use task::{Task, TaskDraft};
