use super::{DocumentSink, SinkError, SinkResult};
use crate::document::Document;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Default)]
struct State {
    docs: BTreeMap<String, Document>,
    unreachable: Option<String>,
}

/// Document sink held in memory, keyed by document id.
///
/// Clones share the same store.
#[derive(Clone, Default)]
pub struct InMemoryDocumentSink {
    state: Arc<RwLock<State>>,
}

impl InMemoryDocumentSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with a connection error until cleared
    pub fn set_unreachable(&self, reason: Option<&str>) {
        self.state.write().unreachable = reason.map(str::to_string);
    }

    pub fn get(&self, id: &str) -> Option<Document> {
        self.state.read().docs.get(id).cloned()
    }

    pub fn ids(&self) -> Vec<String> {
        self.state.read().docs.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.state.read().docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_reachable(state: &State) -> SinkResult<()> {
        match &state.unreachable {
            Some(reason) => Err(SinkError::connection(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentSink for InMemoryDocumentSink {
    async fn add(&self, docs: Vec<Document>) -> SinkResult<()> {
        let mut state = self.state.write();
        Self::check_reachable(&state)?;

        // Validate the whole batch before storing any of it
        let mut keyed = Vec::with_capacity(docs.len());
        for doc in docs {
            let id = doc
                .id()
                .ok_or_else(|| SinkError::write_failed("document has no id"))?
                .to_string();
            keyed.push((id, doc));
        }

        debug!(count = keyed.len(), "Storing documents");
        state.docs.extend(keyed);
        Ok(())
    }

    async fn remove_all(&self) -> SinkResult<()> {
        let mut state = self.state.write();
        Self::check_reachable(&state)?;
        state.docs.clear();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
