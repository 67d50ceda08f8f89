//! # RIALTO SQLite
//!
//! Relational derivative of the research graph: one table per resource
//! variant plus the publication ↔ author join table.
//!
//! Rows hold a canonical JSON projection of the resource, so retrieval
//! returns stable text with a fixed key order. Person `countries` is `null`
//! until countries enrichment has run and a list afterwards, even when empty.
//!
//! ```rust
//! use rialto_core::vocab::{attr, vivo};
//! use rialto_core::{AttributeBag, Resource};
//! use rialto_sqlite::{SqlitePool, SqliteWriter};
//!
//! let writer = SqliteWriter::new(SqlitePool::memory()?);
//! let org = Resource::from_bag(
//!     AttributeBag::new("http://example.com/org1")
//!         .with_type(vivo::SCHOOL)
//!         .with_literal(attr::NAME, "School of Engineering"),
//! )
//! .unwrap();
//!
//! writer.add_resources(&[org])?;
//! assert_eq!(
//!     writer.retrieve_one_organization("http://example.com/org1")?,
//!     r#"{"name": "School of Engineering", "type": "http://vivoweb.org/ontology/core#School"}"#
//! );
//! # Ok::<(), rialto_sqlite::SqliteError>(())
//! ```

pub mod canonical;
pub mod config;
pub mod connection;
pub mod error;
pub mod projection;
pub mod schema;
pub mod writer;

pub use config::SqliteConfig;
pub use connection::SqlitePool;
pub use error::{SqliteError, SqliteResult};
pub use writer::SqliteWriter;
