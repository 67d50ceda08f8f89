//! Ingestion pass orchestrator
//!
//! A pass scans every stored resource, prepares each one (person enrichment,
//! publication relationship labels) and hands each batch to every writer.
//!
//! ```text
//! Repository::all_resources (blocking task)
//!   └─> mpsc batches
//!         ├─> enrich_person        (Person)
//!         ├─> resolve_relationships (Publication)
//!         └─> DerivativeWriter::add (each writer, in order)
//! ```

use anyhow::{Context, Result};
use futures::future::try_join_all;
use rialto_config::PipelineConfig;
use rialto_core::{
    enrich_person, ClassificationSource, DerivativeWriter, Labeled, Publication, Repository,
    RepositoryError, Resource, ResourceKind,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Counts for one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub batches: usize,
    pub people: usize,
    pub organizations: usize,
    pub publications: usize,
    pub other: usize,
}

impl PassSummary {
    pub fn resources(&self) -> usize {
        self.people + self.organizations + self.publications + self.other
    }

    fn record_batch(&mut self, resources: &[Resource]) {
        self.batches += 1;
        for resource in resources {
            match resource.kind() {
                ResourceKind::Person => self.people += 1,
                ResourceKind::Organization => self.organizations += 1,
                ResourceKind::Publication => self.publications += 1,
                ResourceKind::Generic => self.other += 1,
            }
        }
    }
}

pub struct DerivativePipeline {
    repository: Arc<dyn Repository>,
    classifier: Arc<dyn ClassificationSource>,
    writers: Vec<Arc<dyn DerivativeWriter>>,
    config: PipelineConfig,
}

impl DerivativePipeline {
    pub fn new(
        repository: Arc<dyn Repository>,
        classifier: Arc<dyn ClassificationSource>,
        writers: Vec<Arc<dyn DerivativeWriter>>,
    ) -> Self {
        Self::with_config(repository, classifier, writers, PipelineConfig::default())
    }

    pub fn with_config(
        repository: Arc<dyn Repository>,
        classifier: Arc<dyn ClassificationSource>,
        writers: Vec<Arc<dyn DerivativeWriter>>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            repository,
            classifier,
            writers,
            config,
        }
    }

    /// Run a full pass over the repository.
    ///
    /// The first failing batch stops the scan; its error is returned.
    pub async fn run_all(&self) -> Result<PassSummary> {
        info!(writers = self.writers.len(), "Starting derivative pass");

        let (tx, mut rx) = mpsc::channel::<Vec<Resource>>(self.config.channel_capacity.max(1));
        let repository = Arc::clone(&self.repository);
        let scan = tokio::task::spawn_blocking(move || {
            repository.all_resources(&mut |batch| {
                tx.blocking_send(batch)
                    .map_err(|_| RepositoryError::Aborted("batch consumer stopped".to_string()))
            })
        });

        let mut summary = PassSummary::default();
        let mut failure = None;
        while let Some(batch) = rx.recv().await {
            match self.process_batch(batch).await {
                Ok(written) => summary.record_batch(&written),
                Err(e) => {
                    warn!(error = %e, "Batch failed, stopping scan");
                    failure = Some(e);
                    break;
                }
            }
        }
        // Fails the scan's next send
        drop(rx);

        let scanned = scan.await.context("Repository scan task panicked")?;
        if let Some(e) = failure {
            return Err(e);
        }
        scanned.context("Repository scan failed")?;

        info!(
            batches = summary.batches,
            resources = summary.resources(),
            "Derivative pass complete"
        );
        Ok(summary)
    }

    /// Look up `subjects` and write them, outside a full pass.
    pub async fn process_subjects(&self, subjects: &[String]) -> Result<PassSummary> {
        let resources = self.lookup(subjects.to_vec()).await?;
        let written = self.process_batch(resources).await?;

        let mut summary = PassSummary::default();
        summary.record_batch(&written);
        Ok(summary)
    }

    /// Prepare every resource of a batch, then hand the batch to each writer.
    pub async fn process_batch(&self, resources: Vec<Resource>) -> Result<Vec<Resource>> {
        let prepared = try_join_all(resources.into_iter().map(|r| self.prepare(r))).await?;

        for writer in &self.writers {
            writer
                .add(&prepared)
                .await
                .with_context(|| format!("Writer '{}' failed to add {} resources", writer.name(), prepared.len()))?;
        }
        debug!(count = prepared.len(), "Batch written");
        Ok(prepared)
    }

    /// Enrich a person or resolve a publication's relationships.
    pub async fn prepare(&self, resource: Resource) -> Result<Resource> {
        match resource {
            Resource::Person(mut person) if !self.config.skip_enrichment => {
                enrich_person(&mut person, self.classifier.as_ref())
                    .await
                    .with_context(|| format!("Failed to enrich {}", person.subject()))?;
                Ok(Resource::Person(person))
            }
            Resource::Publication(publication) if !self.config.skip_relationships => {
                let publication = self.resolve_relationships(publication).await?;
                Ok(Resource::Publication(publication))
            }
            other => Ok(other),
        }
    }

    /// Fill authors, concepts and grants with labels from the referenced resources.
    /// A reference the repository cannot resolve is labelled with its own URI.
    pub async fn resolve_relationships(&self, publication: Publication) -> Result<Publication> {
        let authors = owned(publication.author_subjects());
        let concepts = owned(publication.concept_subjects());
        let grants = owned(publication.grant_subjects());

        let mut wanted: Vec<String> = Vec::new();
        for subject in authors.iter().chain(&concepts).chain(&grants) {
            if !wanted.contains(subject) {
                wanted.push(subject.clone());
            }
        }
        if wanted.is_empty() {
            return Ok(publication);
        }

        let labels: HashMap<String, String> = self
            .lookup(wanted)
            .await
            .with_context(|| format!("Failed to resolve relationships of {}", publication.subject()))?
            .iter()
            .map(|r| (r.subject().to_string(), r.display_label()))
            .collect();

        let label = |subjects: Vec<String>| -> Vec<Labeled> {
            subjects
                .into_iter()
                .map(|s| {
                    let text = labels.get(&s).cloned().unwrap_or_else(|| s.clone());
                    Labeled::new(s, text)
                })
                .collect()
        };

        Ok(publication
            .with_authors(label(authors))
            .with_concepts(label(concepts))
            .with_grants(label(grants)))
    }

    /// Clear every writer.
    pub async fn remove_all(&self) -> Result<()> {
        for writer in &self.writers {
            writer
                .remove_all()
                .await
                .with_context(|| format!("Writer '{}' failed to remove all", writer.name()))?;
        }
        info!("All derivatives removed");
        Ok(())
    }

    async fn lookup(&self, subjects: Vec<String>) -> Result<Vec<Resource>> {
        let repository = Arc::clone(&self.repository);
        let resources = tokio::task::spawn_blocking(move || repository.subjects_to_resources(&subjects))
            .await
            .context("Repository lookup task panicked")??;
        Ok(resources)
    }
}

fn owned(subjects: Vec<&str>) -> Vec<String> {
    subjects.into_iter().map(str::to_string).collect()
}
