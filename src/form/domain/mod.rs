//! Domain model for the entry form session.

mod error;
mod session;

pub use error::FormSessionError;
pub use session::{DraftField, FormMode, FormSession, PendingCommit};
