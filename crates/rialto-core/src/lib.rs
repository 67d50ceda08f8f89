//! # RIALTO Core
//!
//! Resource model for RIALTO derivatives: attribute bags, type dispatch into
//! person / organization / publication variants, and person enrichment from
//! classification queries.
//!
//! ## Flow
//!
//! 1. A [`Repository`] yields [`AttributeBag`]s (or resources built from them)
//! 2. [`Resource::from_bag`] validates the subject and picks the variant once
//! 3. People are enriched from a [`ClassificationSource`] via [`enrich_person`]
//! 4. Writers ([`DerivativeWriter`]) project the finished, read-only resource
//!
//! ## Usage
//!
//! ```rust
//! use rialto_core::vocab::{attr, foaf};
//! use rialto_core::{AttributeBag, Resource, ResourceKind};
//!
//! let bag = AttributeBag::new("http://example.com/record1")
//!     .with_type(foaf::PERSON)
//!     .with_literal(attr::FIRSTNAME, "Barbara")
//!     .with_literal(attr::LASTNAME, "Liskov");
//!
//! let resource = Resource::from_bag(bag)?;
//! assert_eq!(resource.kind(), ResourceKind::Person);
//! assert_eq!(resource.display_label(), "Barbara Liskov");
//! # Ok::<(), rialto_core::ConstructionError>(())
//! ```

pub mod dispatch;
pub mod enrichment;
pub mod organization;
pub mod person;
pub mod publication;
pub mod query;
pub mod repository;
pub mod resource;
pub mod term;
pub mod test_support;
pub mod vocab;
pub mod writer;

pub use dispatch::{Resource, ResourceKind};
pub use enrichment::enrich_person;
pub use organization::Organization;
pub use person::{OrgBucket, Person};
pub use publication::Publication;
pub use query::{QueryResults, QueryResultsError, Solution};
pub use repository::{
    ClassificationError, ClassificationResult, ClassificationSource, Repository, RepositoryError,
    RepositoryResult, SparqlClassifier, SparqlEndpoint,
};
pub use resource::{AttributeBag, BaseResource, ConstructionError, ConstructionResult};
pub use term::{Labeled, Term};
pub use writer::{DerivativeWriter, WriterError, WriterResult};
