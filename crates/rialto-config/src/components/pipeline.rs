//! Ingestion pass configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Batches buffered between the repository scan and the writers
    pub channel_capacity: usize,
    /// Skip person enrichment (projections then carry empty buckets)
    pub skip_enrichment: bool,
    /// Skip label lookups for publication authors, concepts and grants
    pub skip_relationships: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 4,
            skip_enrichment: false,
            skip_relationships: false,
        }
    }
}
