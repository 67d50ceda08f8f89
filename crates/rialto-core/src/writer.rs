//! Outbound derivative writer contract
//!
//! Both the document index and the relational store receive typed resources
//! through [`DerivativeWriter`]; backend errors are folded into
//! [`WriterError`] without losing the not-found / connectivity distinction.

use crate::dispatch::Resource;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriterError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backing store unreachable: {0}")]
    Connectivity(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type WriterResult<T> = Result<T, WriterError>;

impl WriterError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }
}

/// A sink that keeps a derived copy of the graph.
#[async_trait]
pub trait DerivativeWriter: Send + Sync {
    /// Drop every derived record
    async fn remove_all(&self) -> WriterResult<()>;

    /// Upsert each resource
    async fn add(&self, resources: &[Resource]) -> WriterResult<()>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}
