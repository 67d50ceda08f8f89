//! Per-variant indexers and the composite entry point
//!
//! Each indexer takes the document built so far and returns it with its own
//! fields added. [`CompositeIndexer`] seeds the document with `id` and
//! `type_ssi` when they are absent and picks the indexer for the resource's variant.

mod organization;
mod person;
mod publication;

pub use organization::OrganizationIndexer;
pub use person::PersonIndexer;
pub use publication::PublicationIndexer;

use crate::document::{Document, ID_FIELD};
use crate::mapping::{apply_mapping, RESOURCE_FIELDS};
use rialto_core::{BaseResource, Labeled, Resource};
use serde_json::Value;

pub const TYPE_FIELD: &str = "type_ssi";

pub trait Indexer<R: ?Sized>: Send + Sync {
    fn index(&self, resource: &R, doc: Document) -> Document;
}

/// Indexer for resources that are none of the specialised variants.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResourceIndexer;

impl Indexer<BaseResource> for ResourceIndexer {
    fn index(&self, resource: &BaseResource, doc: Document) -> Document {
        apply_mapping(resource, doc, RESOURCE_FIELDS)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CompositeIndexer {
    publications: PublicationIndexer,
    people: PersonIndexer,
    organizations: OrganizationIndexer,
    resources: ResourceIndexer,
}

impl CompositeIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh document for `resource`.
    pub fn to_document(&self, resource: &Resource) -> Document {
        self.index(resource, Document::new())
    }
}

impl Indexer<Resource> for CompositeIndexer {
    /// Seeds `id` and `type_ssi` unless the incoming document already has them.
    fn index(&self, resource: &Resource, mut doc: Document) -> Document {
        if !doc.contains(ID_FIELD) {
            doc.set(ID_FIELD, resource.subject());
        }
        if !doc.contains(TYPE_FIELD) {
            doc.set(TYPE_FIELD, resource.kind().as_str());
        }

        match resource {
            Resource::Publication(p) => self.publications.index(p, doc),
            Resource::Person(p) => self.people.index(p, doc),
            Resource::Organization(o) => self.organizations.index(o, doc),
            Resource::Generic(b) => self.resources.index(b, doc),
        }
    }
}

/// Write `items` as two index-aligned list fields, or nothing when empty.
pub(crate) fn set_labeled(doc: &mut Document, uri_field: &str, label_field: &str, items: &[Labeled]) {
    if items.is_empty() {
        return;
    }
    let (uris, labels) = rialto_core::term::unzip_labeled(items);
    doc.set(uri_field, uris.into_iter().map(Value::from).collect::<Vec<_>>());
    doc.set(label_field, labels.into_iter().map(Value::from).collect::<Vec<_>>());
}
