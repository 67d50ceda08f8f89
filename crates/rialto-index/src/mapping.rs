//! Static attribute → field tables
//!
//! The suffix of each field name encodes its shape in the index schema:
//! `_tesi` is a single stored text value, `_tesim`/`_tsim` are multi-valued
//! text and `_ssim` is a multi-valued exact-match string. Relationship fields
//! are not listed here; the indexers expand them into URI/label pairs.

use crate::document::Document;
use rialto_core::vocab::attr;
use rialto_core::{BaseResource, Term};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// First non-empty value, written as a string
    Single,
    /// Every non-empty value in order, written as a list
    Multi,
}

impl FieldShape {
    /// Shape implied by a field name suffix.
    pub fn for_field(field: &str) -> Self {
        if field.ends_with("_tesi") || field.ends_with("_ssi") {
            Self::Single
        } else {
            Self::Multi
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub attribute: &'static str,
    pub field: &'static str,
}

const fn map(attribute: &'static str, field: &'static str) -> FieldMapping {
    FieldMapping { attribute, field }
}

pub static PUBLICATION_FIELDS: &[FieldMapping] = &[
    map(attr::TITLE, "title_tesi"),
    map(attr::CREATED, "created_ssim"),
    map(attr::IDENTIFIER, "identifiers_ssim"),
    map(attr::DOI, "doi_ssim"),
    map(attr::ABSTRACT, "abstract_tesim"),
    map(attr::PUBLISHER, "publisher_ssim"),
    map(attr::DESCRIPTION, "description_tesim"),
    map(attr::CITES, "cites_ssim"),
    map(attr::LINK, "link_ssim"),
    map(attr::FUNDED_BY, "funded_by_ssim"),
    map(attr::SPONSOR, "sponsor_label_tsim"),
    map(attr::HAS_INSTRUMENT, "has_instrument_ssim"),
    map(attr::SAME_AS, "same_as_ssim"),
    map(attr::JOURNAL_ISSUE, "journal_issue_ssim"),
    map(attr::SUBJECT, "subject_label_ssim"),
    map(attr::ALTERNATIVE_TITLE, "alternative_title_tesim"),
];

pub static PERSON_FIELDS: &[FieldMapping] = &[
    map(attr::FIRSTNAME, "first_name_tesi"),
    map(attr::LASTNAME, "last_name_tesi"),
];

pub static ORGANIZATION_FIELDS: &[FieldMapping] = &[
    map(attr::NAME, "name_tesi"),
    map(attr::ALTERNATIVE_TITLE, "alternative_name_tesim"),
];

pub static RESOURCE_FIELDS: &[FieldMapping] = &[
    map(attr::TITLE, "title_tesi"),
    map(attr::LABEL, "label_tesim"),
];

/// Copy every mapped attribute present on `resource` into `doc`.
///
/// Fields of attributes that are absent, or whose values are all empty, are
/// left alone.
pub fn apply_mapping(resource: &BaseResource, mut doc: Document, table: &[FieldMapping]) -> Document {
    for mapping in table {
        let values: Vec<&str> = resource
            .values_of(mapping.attribute)
            .iter()
            .map(Term::value)
            .filter(|v| !v.is_empty())
            .collect();

        if values.is_empty() {
            continue;
        }

        match FieldShape::for_field(mapping.field) {
            FieldShape::Single => doc.set(mapping.field, values[0]),
            FieldShape::Multi => doc.set(
                mapping.field,
                values.into_iter().map(Value::from).collect::<Vec<_>>(),
            ),
        }
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use rialto_core::vocab::bibo;
    use rialto_core::AttributeBag;
    use std::collections::HashSet;

    #[test]
    fn test_shapes_from_suffix() {
        assert_eq!(FieldShape::for_field("title_tesi"), FieldShape::Single);
        assert_eq!(FieldShape::for_field("type_ssi"), FieldShape::Single);
        assert_eq!(FieldShape::for_field("abstract_tesim"), FieldShape::Multi);
        assert_eq!(FieldShape::for_field("doi_ssim"), FieldShape::Multi);
        assert_eq!(FieldShape::for_field("sponsor_label_tsim"), FieldShape::Multi);
    }

    #[test]
    fn test_tables_have_unique_fields() {
        for table in [PUBLICATION_FIELDS, PERSON_FIELDS, ORGANIZATION_FIELDS, RESOURCE_FIELDS] {
            let fields: HashSet<_> = table.iter().map(|m| m.field).collect();
            assert_eq!(fields.len(), table.len());
        }
    }

    #[test]
    fn test_apply_mapping_skips_empty_and_keeps_unmapped() {
        let bag = AttributeBag::new("http://example.com/p1")
            .with_type(bibo::DOCUMENT)
            .with_literal(attr::TITLE, "First")
            .with_literal(attr::TITLE, "Second")
            .with_literal(attr::CITES, "")
            .with_uri(attr::LINK, "http://example.com/a")
            .with_uri(attr::LINK, "http://example.com/a");
        let resource = BaseResource::from_bag(bag).unwrap();

        let mut doc = Document::with_id("http://example.com/p1");
        doc.set("ingest_batch_ssi", "b-7");
        let doc = apply_mapping(&resource, doc, PUBLICATION_FIELDS);

        assert_eq!(doc.get_str("title_tesi"), Some("First"));
        assert!(!doc.contains("cites_ssim"));
        assert_eq!(
            doc.get_strings("link_ssim"),
            Some(vec!["http://example.com/a", "http://example.com/a"])
        );
        assert_eq!(doc.get_str("ingest_batch_ssi"), Some("b-7"));
    }
}
