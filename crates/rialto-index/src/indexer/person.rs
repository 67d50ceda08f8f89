use super::{set_labeled, Indexer};
use crate::document::Document;
use crate::mapping::{apply_mapping, PERSON_FIELDS};
use rialto_core::{Labeled, Person};

pub const NAME_FIELD: &str = "name_tesi";

/// Each enrichment bucket with its URI field and label field.
fn buckets(person: &Person) -> [(&[Labeled], &'static str, &'static str); 6] {
    [
        (person.department_orgs(), "departments_ssim", "department_labels_tsim"),
        (person.school_orgs(), "schools_ssim", "school_labels_tsim"),
        (person.institution_orgs(), "institutions_ssim", "institution_labels_tsim"),
        (person.institute_orgs(), "institutes_ssim", "institute_labels_tsim"),
        (person.countries(), "countries_ssim", "country_labels_ssim"),
        (person.subtypes(), "subtypes_ssim", "subtype_labels_ssim"),
    ]
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PersonIndexer;

impl Indexer<Person> for PersonIndexer {
    fn index(&self, person: &Person, doc: Document) -> Document {
        let mut doc = apply_mapping(person.base(), doc, PERSON_FIELDS);

        let name = person.full_name();
        if !name.is_empty() {
            doc.set(NAME_FIELD, name);
        }

        for (items, uri_field, label_field) in buckets(person) {
            set_labeled(&mut doc, uri_field, label_field, items);
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rialto_core::vocab::{attr, foaf, vivo};
    use rialto_core::{AttributeBag, BaseResource, QueryResults, Solution};

    fn person() -> Person {
        let bag = AttributeBag::new("http://example.com/record1")
            .with_type(foaf::PERSON)
            .with_literal(attr::FIRSTNAME, "Barbara")
            .with_literal(attr::LASTNAME, "Liskov");
        Person::new(BaseResource::from_bag(bag).unwrap())
    }

    #[test]
    fn test_unenriched_person_has_no_bucket_fields() {
        let person = person();
        let doc = PersonIndexer.index(&person, Document::new());

        assert_eq!(doc.get_str(NAME_FIELD), Some("Barbara Liskov"));
        assert_eq!(doc.get_str("last_name_tesi"), Some("Liskov"));
        for (_, uri_field, label_field) in buckets(&person) {
            assert!(!doc.contains(uri_field));
            assert!(!doc.contains(label_field));
        }
    }

    #[test]
    fn test_buckets_written_as_pairs() {
        let mut person = person();
        person.set_position_organization_info(&QueryResults::new(
            vec!["org".into(), "name".into(), "type".into()],
            vec![
                Solution::new()
                    .bind_uri("org", "http://example.com/ee")
                    .bind_literal("name", "Electrical Engineering")
                    .bind_uri("type", vivo::DEPARTMENT),
                Solution::new()
                    .bind_uri("org", "http://example.com/ne")
                    .bind_literal("name", "Nuclear Engineering")
                    .bind_uri("type", vivo::DEPARTMENT),
            ],
        ));
        person.set_countries_info(&QueryResults::new(
            vec!["country".into(), "label".into()],
            vec![Solution::new()
                .bind_uri("country", "http://sws.geonames.org/6252001/")
                .bind_literal("label", "United States")],
        ));

        let doc = PersonIndexer.index(&person, Document::new());

        assert_eq!(
            doc.get_strings("departments_ssim"),
            Some(vec!["http://example.com/ee", "http://example.com/ne"])
        );
        assert_eq!(
            doc.get_strings("department_labels_tsim"),
            Some(vec!["Electrical Engineering", "Nuclear Engineering"])
        );
        assert_eq!(doc.get_strings("country_labels_ssim"), Some(vec!["United States"]));
        assert!(!doc.contains("schools_ssim"));
    }
}
