//! Error types for SQLite storage

use rialto_core::WriterError;
use rusqlite::ErrorCode;
use thiserror::Error;

/// SQLite storage error type
#[derive(Error, Debug)]
pub enum SqliteError {
    /// Database could not be opened or reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// Schema/migration error
    #[error("Schema error: {0}")]
    Schema(String),

    /// No row for the requested subject
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Blocking task panicked or was cancelled
    #[error("Task error: {0}")]
    Task(String),

    /// Underlying rusqlite error
    #[error("SQLite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for SQLite operations
pub type SqliteResult<T> = Result<T, SqliteError>;

impl SqliteError {
    /// Whether the store itself is unavailable (as opposed to a bad request)
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Connection(_) => true,
            Self::Rusqlite(rusqlite::Error::SqliteFailure(e, _)) => matches!(
                e.code,
                ErrorCode::DatabaseBusy
                    | ErrorCode::DatabaseLocked
                    | ErrorCode::CannotOpen
                    | ErrorCode::SystemIoFailure
                    | ErrorCode::NotADatabase
            ),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for SqliteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<SqliteError> for WriterError {
    fn from(err: SqliteError) -> Self {
        if err.is_connectivity() {
            return Self::Connectivity(err.to_string());
        }
        match err {
            SqliteError::NotFound(subject) => Self::NotFound(subject),
            SqliteError::Serialization(msg) => Self::Serialization(msg),
            other => Self::Backend(other.to_string()),
        }
    }
}
