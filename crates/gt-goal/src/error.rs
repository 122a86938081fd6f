// error.rs — Error types for the goal subsystem.

use thiserror::Error;

/// Errors that can occur around goal records and event dispatch.
///
/// Note that [`GoalStore::append`](crate::GoalStore::append) itself has no
/// error path: blank input is dropped silently and the unchanged list is
/// returned. Errors here cover status parsing and the event log.
#[derive(Debug, Error)]
pub enum GoalError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to serialize/deserialize goal data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A status string didn't match any known status.
    #[error("unknown goal status: {0:?}")]
    UnknownStatus(String),
}
