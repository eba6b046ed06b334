//! Error types for eventdesk.

use thiserror::Error;

/// Failures while fetching the event collection.
///
/// The core crate never performs I/O itself; whoever fetches the event list
/// maps its client errors into one of these variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Server responded with status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Could not decode event list: {0}")]
    Decode(String),
}

/// Errors that can occur while loading an event for editing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("No event with id '{0}'")]
    InvalidId(String),
}

/// Errors that can occur in eventdesk operations.
#[derive(Error, Debug)]
pub enum EventDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Result type alias for eventdesk operations.
pub type EventDeskResult<T> = Result<T, EventDeskError>;
