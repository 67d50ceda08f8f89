use super::{set_labeled, Indexer};
use crate::document::Document;
use crate::mapping::{apply_mapping, PUBLICATION_FIELDS};
use rialto_core::Publication;

pub const AUTHORS_FIELD: &str = "authors_ssim";
pub const AUTHOR_LABELS_FIELD: &str = "author_labels_tsim";
pub const CONCEPTS_FIELD: &str = "concepts_ssim";
pub const CONCEPT_LABELS_FIELD: &str = "concept_labels_ssim";
pub const GRANTS_FIELD: &str = "grants_ssim";
pub const GRANT_LABELS_FIELD: &str = "grant_labels_ssim";
pub const CREATED_YEAR_FIELD: &str = "created_year_isim";

#[derive(Debug, Default, Clone, Copy)]
pub struct PublicationIndexer;

impl Indexer<Publication> for PublicationIndexer {
    fn index(&self, publication: &Publication, doc: Document) -> Document {
        let mut doc = apply_mapping(publication.base(), doc, PUBLICATION_FIELDS);

        set_labeled(&mut doc, AUTHORS_FIELD, AUTHOR_LABELS_FIELD, &publication.authors);
        set_labeled(&mut doc, CONCEPTS_FIELD, CONCEPT_LABELS_FIELD, &publication.concepts);
        set_labeled(&mut doc, GRANTS_FIELD, GRANT_LABELS_FIELD, &publication.grants);

        if let Some(year) = publication.created_year() {
            doc.set(CREATED_YEAR_FIELD, year);
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rialto_core::vocab::{attr, bibo};
    use rialto_core::{AttributeBag, BaseResource, Labeled};

    #[test]
    fn test_year_omitted_when_created_is_not_a_year() {
        let bag = AttributeBag::new("http://example.com/p")
            .with_type(bibo::ARTICLE)
            .with_literal(attr::CREATED, "circa 1990");
        let publication = Publication::new(BaseResource::from_bag(bag).unwrap());

        let doc = PublicationIndexer.index(&publication, Document::new());

        assert_eq!(doc.get_strings("created_ssim"), Some(vec!["circa 1990"]));
        assert!(!doc.contains(CREATED_YEAR_FIELD));
    }

    #[test]
    fn test_concepts_and_grants_are_parallel() {
        let bag = AttributeBag::new("http://example.com/p").with_type(bibo::DOCUMENT);
        let publication = Publication::new(BaseResource::from_bag(bag).unwrap())
            .with_concepts(vec![Labeled::new("http://example.com/concept1", "Magic")])
            .with_grants(vec![Labeled::new("http://example.com/grant1", "Learning Magic")]);

        let doc = PublicationIndexer.index(&publication, Document::new());

        assert_eq!(doc.get_strings(CONCEPTS_FIELD), Some(vec!["http://example.com/concept1"]));
        assert_eq!(doc.get_strings(CONCEPT_LABELS_FIELD), Some(vec!["Magic"]));
        assert_eq!(doc.get_strings(GRANTS_FIELD), Some(vec!["http://example.com/grant1"]));
        assert_eq!(doc.get_strings(GRANT_LABELS_FIELD), Some(vec!["Learning Magic"]));
        assert!(!doc.contains(AUTHORS_FIELD));
        assert!(!doc.contains(AUTHOR_LABELS_FIELD));
    }
}
