//! Core types for eventdesk.
//!
//! This crate provides everything the `eventdesk` binary needs apart from
//! the network and the terminal:
//! - `Event` and related types as served by the event API
//! - `edit` module with the load phase and the edit-form state machine
//! - `schedule` module for grouping occurrences by date

pub mod config;
pub mod edit;
pub mod error;
pub mod event;
pub mod schedule;
pub mod session;

// Re-export all event types at crate root for convenience
pub use event::*;
