pub mod pipeline;
pub mod storage;

pub use pipeline::PipelineConfig;
pub use storage::StorageConfig;
