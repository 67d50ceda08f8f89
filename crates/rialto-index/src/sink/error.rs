//! Sink error types

use rialto_core::WriterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    /// Index unreachable
    #[error("Connection error: {0}")]
    Connection(String),

    /// Index rejected the documents
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SinkResult<T> = Result<T, SinkError>;

impl SinkError {
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub fn write_failed(msg: impl Into<String>) -> Self {
        Self::WriteFailed(msg.into())
    }
}

impl From<SinkError> for WriterError {
    fn from(err: SinkError) -> Self {
        match err {
            SinkError::Connection(msg) => WriterError::Connectivity(msg),
            SinkError::WriteFailed(msg) => WriterError::Backend(msg),
            SinkError::Serialization(e) => WriterError::Serialization(e.to_string()),
        }
    }
}
