//! Entry form for creating and editing tasks.
//!
//! The form is a session state machine that is either closed or open in
//! create or edit mode, with a draft of the task fields. The
//! [`services::TaskEditor`] drives one session against the task list and is
//! the object a presentation layer talks to:
//!
//! - Session state and draft fields in [`domain`]
//! - Image acquisition contract in [`ports`]
//! - The editor in [`services`]

pub mod domain;
pub mod ports;
pub mod services;
