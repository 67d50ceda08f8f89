//! # RIALTO Index
//!
//! Projects typed resources into flat search documents. Scalar attributes go
//! through static mapping tables; relationships (authors, concepts, grants and
//! the person enrichment buckets) become pairs of index-aligned URI and label
//! fields. Nothing is written for an attribute the resource does not have.
//!
//! ```rust
//! use rialto_core::vocab::{attr, bibo};
//! use rialto_core::{AttributeBag, Resource};
//! use rialto_index::CompositeIndexer;
//!
//! let resource = Resource::from_bag(
//!     AttributeBag::new("http://example.com/pub1")
//!         .with_type(bibo::DOCUMENT)
//!         .with_literal(attr::TITLE, "Hello world!")
//!         .with_literal(attr::CREATED, "2004-06-11?"),
//! )
//! .unwrap();
//!
//! let doc = CompositeIndexer::new().to_document(&resource);
//! assert_eq!(doc.get_str("title_tesi"), Some("Hello world!"));
//! assert_eq!(doc.get("created_year_isim"), Some(&serde_json::json!(2004)));
//! assert!(!doc.contains("abstract_tesim"));
//! ```

pub mod document;
pub mod indexer;
pub mod mapping;
pub mod sink;
pub mod writer;

pub use document::Document;
pub use indexer::{
    CompositeIndexer, Indexer, OrganizationIndexer, PersonIndexer, PublicationIndexer,
    ResourceIndexer,
};
pub use mapping::{FieldMapping, FieldShape};
pub use sink::{DocumentSink, InMemoryDocumentSink, SinkError, SinkResult};
pub use writer::IndexWriter;
