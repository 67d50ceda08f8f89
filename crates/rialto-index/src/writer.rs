//! Derivative writer over a document sink

use crate::document::Document;
use crate::indexer::CompositeIndexer;
use crate::sink::DocumentSink;
use async_trait::async_trait;
use rialto_core::{DerivativeWriter, Resource, WriterResult};
use tracing::debug;

/// Projects resources into documents and hands them to `S`.
pub struct IndexWriter<S> {
    sink: S,
    indexer: CompositeIndexer,
}

impl<S: DocumentSink> IndexWriter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            indexer: CompositeIndexer::new(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn to_documents(&self, resources: &[Resource]) -> Vec<Document> {
        resources.iter().map(|r| self.indexer.to_document(r)).collect()
    }
}

#[async_trait]
impl<S: DocumentSink> DerivativeWriter for IndexWriter<S> {
    async fn remove_all(&self) -> WriterResult<()> {
        debug!(sink = self.sink.name(), "Removing all documents");
        self.sink.remove_all().await?;
        Ok(())
    }

    async fn add(&self, resources: &[Resource]) -> WriterResult<()> {
        if resources.is_empty() {
            return Ok(());
        }
        let docs = self.to_documents(resources);
        debug!(sink = self.sink.name(), count = docs.len(), "Adding documents");
        self.sink.add(docs).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "index"
    }
}
