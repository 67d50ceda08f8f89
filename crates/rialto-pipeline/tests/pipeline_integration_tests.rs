//! Integration tests for DerivativePipeline
//!
//! Full passes over an in-memory repository into both derivative writers,
//! plus the failure paths that must stop a pass.

mod common;

use common::*;
use rialto_config::PipelineConfig;
use rialto_core::test_support::mocks::{MockClassificationSource, MockRepository, MockWriter};
use rialto_core::{DerivativeWriter, Labeled, Resource, WriterError};
use rialto_index::{InMemoryDocumentSink, IndexWriter};
use rialto_pipeline::{DerivativePipeline, PassSummary};
use rialto_sqlite::{SqlitePool, SqliteWriter};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

struct Harness {
    repository: MockRepository,
    classifier: MockClassificationSource,
    sink: InMemoryDocumentSink,
    sqlite: SqliteWriter,
}

impl Harness {
    fn new() -> Self {
        let classifier = MockClassificationSource::new();
        classifier.set_organizations(LISKOV, liskov_organizations());
        classifier.set_countries(LISKOV, liskov_countries());

        Self {
            repository: MockRepository::new(graph()),
            classifier,
            sink: InMemoryDocumentSink::new(),
            sqlite: SqliteWriter::new(SqlitePool::memory().unwrap()),
        }
    }

    fn pipeline(&self, config: PipelineConfig) -> DerivativePipeline {
        let writers: Vec<Arc<dyn DerivativeWriter>> = vec![
            Arc::new(IndexWriter::new(self.sink.clone())),
            Arc::new(self.sqlite.clone()),
        ];
        DerivativePipeline::with_config(
            Arc::new(self.repository.clone()),
            Arc::new(self.classifier.clone()),
            writers,
            config,
        )
    }
}

#[tokio::test]
async fn test_run_all_writes_every_resource_to_both_sinks() {
    let harness = Harness::new();
    let summary = harness.pipeline(PipelineConfig::default()).run_all().await.unwrap();

    assert_eq!(
        summary,
        PassSummary {
            batches: 3,
            people: 3,
            organizations: 1,
            publications: 1,
            other: 1,
        }
    );
    assert_eq!(summary.resources(), 6);
    assert_eq!(harness.sink.len(), 6);

    assert!(harness.sqlite.retrieve_one_organization(SCHOOL).is_ok());
    assert!(harness.sqlite.retrieve_one_publication(PUBLICATION).is_ok());
}

#[tokio::test]
async fn test_people_are_enriched_before_writing() {
    let harness = Harness::new();
    harness.pipeline(PipelineConfig::default()).run_all().await.unwrap();

    assert_eq!(
        harness.sqlite.retrieve_one_person(LISKOV).unwrap(),
        r#"{"name": "Barbara Liskov", "countries": ["http://sws.geonames.org/6252001/"], "departments": ["http://example.com/org/cs"], "institutionalAffiliations": ["http://example.com/org/mit"]}"#
    );
    // No answers for Potter: countries were queried, so the list is set but empty
    assert_eq!(
        harness.sqlite.retrieve_one_person(POTTER).unwrap(),
        r#"{"name": "Harry Potter", "countries": [], "departments": [], "institutionalAffiliations": []}"#
    );

    let doc = harness.sink.get(LISKOV).unwrap();
    assert_eq!(doc.get_strings("department_labels_tsim"), Some(vec!["Computer Science"]));
    assert_eq!(doc.get_strings("institution_labels_tsim"), Some(vec!["MIT"]));

    let calls = harness.classifier.calls();
    assert_eq!(calls.len(), 9);
    assert_eq!(calls.iter().collect::<HashSet<_>>().len(), 3);
}

#[tokio::test]
async fn test_publication_relationships_get_labels() {
    let harness = Harness::new();
    harness.pipeline(PipelineConfig::default()).run_all().await.unwrap();

    let doc = harness.sink.get(PUBLICATION).unwrap();
    assert_eq!(doc.get_strings("authors_ssim"), Some(vec![POTTER, GRANGER]));
    assert_eq!(
        doc.get_strings("author_labels_tsim"),
        Some(vec!["Harry Potter", "Hermione Granger"])
    );
    assert_eq!(doc.get_strings("concept_labels_ssim"), Some(vec!["Magic"]));
    // Unresolvable references fall back to their URI
    assert_eq!(doc.get_strings("grant_labels_ssim"), Some(vec![UNKNOWN_GRANT]));
    assert_eq!(doc.get("created_year_isim"), Some(&json!(2004)));

    let authors = harness
        .sqlite
        .retrieve_people_publication_relationship(PUBLICATION)
        .unwrap();
    assert_eq!(authors.len(), 2);
}

#[tokio::test]
async fn test_skip_flags() {
    let harness = Harness::new();
    let config = PipelineConfig {
        skip_enrichment: true,
        skip_relationships: true,
        ..PipelineConfig::default()
    };
    harness.pipeline(config).run_all().await.unwrap();

    assert!(harness.classifier.calls().is_empty());
    assert_eq!(
        harness.sqlite.retrieve_one_person(LISKOV).unwrap(),
        r#"{"name": "Barbara Liskov", "countries": null, "departments": [], "institutionalAffiliations": []}"#
    );

    let doc = harness.sink.get(PUBLICATION).unwrap();
    assert!(!doc.contains("authors_ssim"));
    // Author links still come from the references on the publication
    assert_eq!(
        harness
            .sqlite
            .retrieve_people_publication_relationship(PUBLICATION)
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn test_writer_failure_stops_the_pass() {
    let repository = MockRepository::new(graph()).with_batch_size(1);
    let writer = MockWriter::new();
    writer.set_failure(Some(WriterError::Connectivity("index down".to_string())));

    let pipeline = DerivativePipeline::new(
        Arc::new(repository),
        Arc::new(MockClassificationSource::new()),
        vec![Arc::new(writer.clone())],
    );

    let err = pipeline.run_all().await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Writer 'mock' failed"), "{message}");
    assert!(message.contains("index down"), "{message}");
    assert!(writer.added().is_empty());
}

#[tokio::test]
async fn test_enrichment_failure_stops_the_pass() {
    let classifier = MockClassificationSource::new();
    classifier.set_failure(Some("endpoint unreachable"));
    let writer = MockWriter::new();

    let pipeline = DerivativePipeline::new(
        Arc::new(MockRepository::new(graph())),
        Arc::new(classifier),
        vec![Arc::new(writer.clone())],
    );

    let err = pipeline.run_all().await.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to enrich"));
    assert!(writer.added().is_empty());
}

#[tokio::test]
async fn test_scan_failure_is_reported() {
    let repository = MockRepository::new(graph());
    repository.set_scan_failure(Some("triplestore offline"));

    let pipeline = DerivativePipeline::new(
        Arc::new(repository),
        Arc::new(MockClassificationSource::new()),
        vec![Arc::new(MockWriter::new())],
    );

    let err = pipeline.run_all().await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Repository scan failed"), "{message}");
    assert!(message.contains("triplestore offline"), "{message}");
}

#[tokio::test]
async fn test_process_subjects_and_remove_all() {
    let writer = MockWriter::new();
    let pipeline = DerivativePipeline::new(
        Arc::new(MockRepository::new(graph())),
        Arc::new(MockClassificationSource::new()),
        vec![Arc::new(writer.clone())],
    );

    let summary = pipeline
        .process_subjects(&[PUBLICATION.to_string(), "http://example.com/missing".to_string()])
        .await
        .unwrap();
    assert_eq!(summary.publications, 1);
    assert_eq!(summary.resources(), 1);

    let added = writer.added();
    let publication = added[0].as_publication().unwrap();
    assert_eq!(
        publication.authors,
        vec![
            Labeled::new(POTTER, "Harry Potter"),
            Labeled::new(GRANGER, "Hermione Granger"),
        ]
    );
    assert!(matches!(added[0], Resource::Publication(_)));

    pipeline.remove_all().await.unwrap();
    assert_eq!(writer.remove_all_count(), 1);
    assert!(writer.added().is_empty());
}
