//! Task list state for the task screen.
//!
//! Holds the ordered task records the screen renders and the add, update,
//! and remove operations behind them. Records live in memory only and are
//! dropped with the owning service. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
