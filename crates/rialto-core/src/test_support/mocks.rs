//! Mock Implementations for Testing
//!
//! In-memory, deterministic stand-ins for the repository, the classification
//! source and a derivative writer. Each records the calls it receives and can
//! be switched into a failing mode.
//!
//! ```rust
//! use rialto_core::test_support::mocks::MockRepository;
//! use rialto_core::{AttributeBag, Repository, Resource};
//!
//! let person = Resource::from_bag(
//!     AttributeBag::new("http://example.com/record1")
//!         .with_type(rialto_core::vocab::foaf::PERSON),
//! )
//! .unwrap();
//!
//! let repo = MockRepository::new(vec![person]);
//! let found = repo
//!     .subjects_to_resources(&["http://example.com/record1".to_string()])
//!     .unwrap();
//! assert_eq!(found.len(), 1);
//! ```

use crate::dispatch::Resource;
use crate::query::QueryResults;
use crate::repository::{
    ClassificationError, ClassificationResult, ClassificationSource, Repository, RepositoryError,
    RepositoryResult,
};
use crate::writer::{DerivativeWriter, WriterError, WriterResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Repository
// ============================================================================

/// In-memory repository over a fixed list of resources
#[derive(Clone)]
pub struct MockRepository {
    resources: Arc<Vec<Resource>>,
    batch_size: usize,
    fail_scan: Arc<Mutex<Option<String>>>,
}

impl MockRepository {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self {
            resources: Arc::new(resources),
            batch_size: 2,
            fail_scan: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Make `all_resources` fail with a connectivity error
    pub fn set_scan_failure(&self, message: Option<&str>) {
        *self.fail_scan.lock().unwrap() = message.map(str::to_string);
    }
}

impl Repository for MockRepository {
    fn subjects_to_resources(&self, subjects: &[String]) -> RepositoryResult<Vec<Resource>> {
        Ok(subjects
            .iter()
            .filter_map(|s| self.resources.iter().find(|r| r.subject() == s.as_str()))
            .cloned()
            .collect())
    }

    fn all_resources(
        &self,
        f: &mut dyn FnMut(Vec<Resource>) -> RepositoryResult<()>,
    ) -> RepositoryResult<()> {
        if let Some(msg) = self.fail_scan.lock().unwrap().clone() {
            return Err(RepositoryError::Connectivity(msg));
        }

        for batch in self.resources.chunks(self.batch_size) {
            f(batch.to_vec())?;
        }
        Ok(())
    }
}

// ============================================================================
// Classification source
// ============================================================================

#[derive(Default, Clone)]
struct PersonAnswers {
    organizations: QueryResults,
    countries: QueryResults,
    subtypes: QueryResults,
}

#[derive(Default)]
struct ClassificationState {
    answers: HashMap<String, PersonAnswers>,
    calls: Vec<String>,
    failure: Option<String>,
}

/// Canned classification answers keyed by person subject.
/// Unknown subjects get empty result sets.
#[derive(Clone, Default)]
pub struct MockClassificationSource {
    state: Arc<Mutex<ClassificationState>>,
}

impl MockClassificationSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_organizations(&self, subject: &str, results: QueryResults) {
        let mut state = self.state.lock().unwrap();
        state.answers.entry(subject.to_string()).or_default().organizations = results;
    }

    pub fn set_countries(&self, subject: &str, results: QueryResults) {
        let mut state = self.state.lock().unwrap();
        state.answers.entry(subject.to_string()).or_default().countries = results;
    }

    pub fn set_subtypes(&self, subject: &str, results: QueryResults) {
        let mut state = self.state.lock().unwrap();
        state.answers.entry(subject.to_string()).or_default().subtypes = results;
    }

    pub fn set_failure(&self, message: Option<&str>) {
        self.state.lock().unwrap().failure = message.map(str::to_string);
    }

    /// Subjects queried so far, one entry per query
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn answer<F>(&self, subject: &str, pick: F) -> ClassificationResult<QueryResults>
    where
        F: FnOnce(&PersonAnswers) -> QueryResults,
    {
        let mut state = self.state.lock().unwrap();
        state.calls.push(subject.to_string());
        if let Some(msg) = &state.failure {
            return Err(ClassificationError::Connectivity(msg.clone()));
        }
        Ok(state.answers.get(subject).map(pick).unwrap_or_default())
    }
}

#[async_trait]
impl ClassificationSource for MockClassificationSource {
    async fn position_organizations(&self, subject: &str) -> ClassificationResult<QueryResults> {
        self.answer(subject, |a| a.organizations.clone())
    }

    async fn countries(&self, subject: &str) -> ClassificationResult<QueryResults> {
        self.answer(subject, |a| a.countries.clone())
    }

    async fn person_subtypes(&self, subject: &str) -> ClassificationResult<QueryResults> {
        self.answer(subject, |a| a.subtypes.clone())
    }
}

// ============================================================================
// Writer
// ============================================================================

#[derive(Default)]
struct WriterState {
    added: Vec<Resource>,
    remove_all_count: usize,
    failure: Option<WriterError>,
}

/// Writer that keeps everything it is given
#[derive(Clone, Default)]
pub struct MockWriter {
    state: Arc<Mutex<WriterState>>,
}

impl MockWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failure(&self, error: Option<WriterError>) {
        self.state.lock().unwrap().failure = error;
    }

    pub fn added(&self) -> Vec<Resource> {
        self.state.lock().unwrap().added.clone()
    }

    pub fn remove_all_count(&self) -> usize {
        self.state.lock().unwrap().remove_all_count
    }
}

#[async_trait]
impl DerivativeWriter for MockWriter {
    async fn remove_all(&self) -> WriterResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = &state.failure {
            return Err(err.clone());
        }
        state.added.clear();
        state.remove_all_count += 1;
        Ok(())
    }

    async fn add(&self, resources: &[Resource]) -> WriterResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = &state.failure {
            return Err(err.clone());
        }
        state.added.extend_from_slice(resources);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
