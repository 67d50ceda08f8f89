//! Inbound collaborator traits
//!
//! The repository enumerates and resolves resources; the classification
//! source answers the three per-person queries. Both talk to the graph store
//! and are implemented outside this crate.

use crate::dispatch::Resource;
use crate::query::{sparql, QueryResults, QueryResultsError};
use crate::resource::ConstructionError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Repository unreachable: {0}")]
    Connectivity(String),

    #[error("Invalid resource: {0}")]
    Construction(#[from] ConstructionError),

    #[error("Invalid query results: {0}")]
    Query(#[from] QueryResultsError),

    #[error("Scan aborted: {0}")]
    Aborted(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Source of stored resources.
pub trait Repository: Send + Sync {
    /// Resolve subjects to resources, in the order of `subjects`. Subjects the
    /// store does not know are skipped.
    fn subjects_to_resources(&self, subjects: &[String]) -> RepositoryResult<Vec<Resource>>;

    /// Hand every stored resource to `f`, batch by batch, in store order.
    /// An error from `f` stops the scan and is returned.
    fn all_resources(
        &self,
        f: &mut dyn FnMut(Vec<Resource>) -> RepositoryResult<()>,
    ) -> RepositoryResult<()>;
}

#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("Graph endpoint unreachable: {0}")]
    Connectivity(String),

    #[error("Invalid query results: {0}")]
    Query(#[from] QueryResultsError),
}

pub type ClassificationResult<T> = Result<T, ClassificationError>;

/// The three classification queries run for every person.
#[async_trait]
pub trait ClassificationSource: Send + Sync {
    /// `{org, name, type}` rows
    async fn position_organizations(&self, subject: &str) -> ClassificationResult<QueryResults>;

    /// `{country, label}` rows
    async fn countries(&self, subject: &str) -> ClassificationResult<QueryResults>;

    /// `{subtype}` rows
    async fn person_subtypes(&self, subject: &str) -> ClassificationResult<QueryResults>;
}

/// Anything that can answer a SPARQL SELECT.
#[async_trait]
pub trait SparqlEndpoint: Send + Sync {
    async fn select(&self, query: &str) -> ClassificationResult<QueryResults>;
}

/// Classification source that runs the stock queries against an endpoint.
pub struct SparqlClassifier<E> {
    endpoint: E,
}

impl<E: SparqlEndpoint> SparqlClassifier<E> {
    pub fn new(endpoint: E) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl<E: SparqlEndpoint> ClassificationSource for SparqlClassifier<E> {
    async fn position_organizations(&self, subject: &str) -> ClassificationResult<QueryResults> {
        self.endpoint
            .select(&sparql::position_organizations(subject))
            .await
    }

    async fn countries(&self, subject: &str) -> ClassificationResult<QueryResults> {
        self.endpoint.select(&sparql::countries(subject)).await
    }

    async fn person_subtypes(&self, subject: &str) -> ClassificationResult<QueryResults> {
        self.endpoint.select(&sparql::person_subtypes(subject)).await
    }
}
