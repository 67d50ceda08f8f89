//! Row metadata for each resource variant
//!
//! Field order here is the key order of the stored JSON.

use rialto_core::{Labeled, Organization, Person, Publication};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PersonMetadata<'a> {
    pub name: String,
    /// `None` until countries enrichment has run
    pub countries: Option<Vec<&'a str>>,
    pub departments: Vec<&'a str>,
    #[serde(rename = "institutionalAffiliations")]
    pub institutional_affiliations: Vec<&'a str>,
}

impl<'a> From<&'a Person> for PersonMetadata<'a> {
    fn from(person: &'a Person) -> Self {
        Self {
            name: person.full_name(),
            countries: person.countries_set().then(|| uris(person.countries())),
            departments: uris(person.department_orgs()),
            institutional_affiliations: uris(person.institution_orgs()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrganizationMetadata<'a> {
    pub name: Option<&'a str>,
    #[serde(rename = "type")]
    pub subtype: Option<&'a str>,
}

impl<'a> From<&'a Organization> for OrganizationMetadata<'a> {
    fn from(org: &'a Organization) -> Self {
        Self {
            name: org.name(),
            subtype: org.subtype(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PublicationMetadata<'a> {
    pub title: Option<&'a str>,
}

impl<'a> From<&'a Publication> for PublicationMetadata<'a> {
    fn from(publication: &'a Publication) -> Self {
        Self {
            title: publication.title(),
        }
    }
}

fn uris(items: &[Labeled]) -> Vec<&str> {
    items.iter().map(|l| l.uri.as_str()).collect()
}

/// Author subjects in author order: the resolved authors when present,
/// otherwise the `author` references on the resource.
pub fn author_uris(publication: &Publication) -> Vec<&str> {
    if publication.authors.is_empty() {
        publication.author_subjects()
    } else {
        uris(&publication.authors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::to_canonical_string;
    use rialto_core::vocab::{attr, bibo, foaf, vivo};
    use rialto_core::{AttributeBag, BaseResource, QueryResults, Solution};

    #[test]
    fn test_person_countries_null_until_enriched() {
        let bag = AttributeBag::new("http://example.com/record1")
            .with_type(foaf::PERSON)
            .with_literal(attr::FIRSTNAME, "Barbara")
            .with_literal(attr::LASTNAME, "Liskov");
        let mut person = Person::new(BaseResource::from_bag(bag).unwrap());

        assert_eq!(
            to_canonical_string(&PersonMetadata::from(&person)).unwrap(),
            r#"{"name": "Barbara Liskov", "countries": null, "departments": [], "institutionalAffiliations": []}"#
        );

        person.set_countries_info(&QueryResults::new(
            vec!["country".into(), "label".into()],
            vec![Solution::new()
                .bind_uri("country", "http://sws.geonames.org/6252001/")
                .bind_literal("label", "United States")],
        ));
        person.set_position_organization_info(&QueryResults::new(
            vec!["org".into(), "name".into(), "type".into()],
            vec![Solution::new()
                .bind_uri("org", "http://example.com/cs")
                .bind_literal("name", "Computer Science")
                .bind_uri("type", vivo::DEPARTMENT)],
        ));

        assert_eq!(
            to_canonical_string(&PersonMetadata::from(&person)).unwrap(),
            r#"{"name": "Barbara Liskov", "countries": ["http://sws.geonames.org/6252001/"], "departments": ["http://example.com/cs"], "institutionalAffiliations": []}"#
        );
    }

    #[test]
    fn test_author_uris_fall_back_to_references() {
        let bag = AttributeBag::new("http://example.com/publication1")
            .with_type(bibo::DOCUMENT)
            .with_uri(attr::AUTHOR, "http://example.com/record2")
            .with_uri(attr::AUTHOR, "http://example.com/record1");
        let publication = Publication::new(BaseResource::from_bag(bag).unwrap());

        assert_eq!(
            author_uris(&publication),
            vec!["http://example.com/record2", "http://example.com/record1"]
        );

        let resolved = publication
            .with_authors(vec![Labeled::new("http://example.com/record1", "Barbara Liskov")]);
        assert_eq!(author_uris(&resolved), vec!["http://example.com/record1"]);
    }
}
