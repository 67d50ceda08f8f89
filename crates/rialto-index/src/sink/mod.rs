//! Search index destinations

mod error;
mod memory;

pub use error::{SinkError, SinkResult};
pub use memory::InMemoryDocumentSink;

use crate::document::Document;
use async_trait::async_trait;

/// A search index that stores documents by `id`.
///
/// Adding a document whose `id` is already present replaces it.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    async fn add(&self, docs: Vec<Document>) -> SinkResult<()>;

    /// Delete every document in the collection
    async fn remove_all(&self) -> SinkResult<()>;

    fn name(&self) -> &'static str;
}
