//! Pipeline Orchestration Layer
//!
//! Coordinates an ingestion pass over the RIALTO graph:
//!
//! 1. **Scan**: enumerate stored resources from the [`Repository`](rialto_core::Repository)
//! 2. **Enrich**: classify each person's organizations, countries and subtypes
//! 3. **Resolve**: label each publication's authors, concepts and grants
//! 4. **Write**: hand each batch to every [`DerivativeWriter`](rialto_core::DerivativeWriter)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rialto_pipeline::DerivativePipeline;
//!
//! let pipeline = DerivativePipeline::with_config(
//!     repository,
//!     classifier,
//!     vec![index_writer, sqlite_writer],
//!     config.pipeline.clone(),
//! );
//!
//! pipeline.remove_all().await?;
//! let summary = pipeline.run_all().await?;
//! ```

pub mod derivative_pipeline;

pub use derivative_pipeline::*;
