use super::Indexer;
use crate::document::Document;
use crate::mapping::{apply_mapping, ORGANIZATION_FIELDS};
use rialto_core::Organization;

pub const SUBTYPE_FIELD: &str = "subtype_ssi";

#[derive(Debug, Default, Clone, Copy)]
pub struct OrganizationIndexer;

impl Indexer<Organization> for OrganizationIndexer {
    fn index(&self, organization: &Organization, doc: Document) -> Document {
        let mut doc = apply_mapping(organization.base(), doc, ORGANIZATION_FIELDS);
        if let Some(subtype) = organization.subtype() {
            doc.set(SUBTYPE_FIELD, subtype);
        }
        doc
    }
}
