//! Error taxonomy for the todo library layers.
//!
//! Every failure that reaches the process boundary is terminal for the
//! current invocation. Malformed command-line input is deliberately absent
//! here: the argument parser reports it through its `valid` flag instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    /// Storage location or date format could not be resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The database file could not be opened or prepared.
    #[error("Failed to connect to database: {0}")]
    Connection(#[source] rusqlite::Error),

    /// An operation targeted a task id with no matching row.
    #[error("{operation}: task {id} not found")]
    NotFound { operation: &'static str, id: i64 },

    /// A command was dispatched without a value it requires.
    #[error("Missing value for '{0}'")]
    MissingValue(&'static str),

    /// Any other failure reported by the storage engine.
    #[error("Database query failed: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    pub fn not_found(operation: &'static str, id: i64) -> Self {
        TodoError::NotFound { operation, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound { .. })
    }
}
