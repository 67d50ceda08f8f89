//! Common fixtures for pipeline tests.

use rialto_core::vocab::{attr, bibo, foaf, vivo};
use rialto_core::{AttributeBag, QueryResults, Resource, Solution};

pub const LISKOV: &str = "http://example.com/record1";
pub const POTTER: &str = "http://example.com/person1";
pub const GRANGER: &str = "http://example.com/person2";
pub const SCHOOL: &str = "http://example.com/org/school-of-engineering";
pub const PUBLICATION: &str = "http://example.com/publication1";
pub const CONCEPT: &str = "http://example.com/concept1";
pub const UNKNOWN_GRANT: &str = "http://example.com/grant-not-in-store";

fn person(subject: &str, first: &str, last: &str) -> Resource {
    Resource::from_bag(
        AttributeBag::new(subject)
            .with_type(foaf::PERSON)
            .with_literal(attr::FIRSTNAME, first)
            .with_literal(attr::LASTNAME, last),
    )
    .unwrap()
}

/// A small store: three people, a school, a concept and one publication
/// referencing two of the people, the concept and a grant that is not stored.
pub fn graph() -> Vec<Resource> {
    vec![
        person(LISKOV, "Barbara", "Liskov"),
        person(POTTER, "Harry", "Potter"),
        person(GRANGER, "Hermione", "Granger"),
        Resource::from_bag(
            AttributeBag::new(SCHOOL)
                .with_type(foaf::ORGANIZATION)
                .with_type(vivo::SCHOOL)
                .with_literal(attr::NAME, "School of Engineering"),
        )
        .unwrap(),
        Resource::from_bag(
            AttributeBag::new(CONCEPT)
                .with_type("http://www.w3.org/2004/02/skos/core#Concept")
                .with_literal(attr::LABEL, "Magic"),
        )
        .unwrap(),
        Resource::from_bag(
            AttributeBag::new(PUBLICATION)
                .with_type(bibo::ACADEMIC_ARTICLE)
                .with_literal(attr::TITLE, "Hello world!")
                .with_literal(attr::CREATED, "2004-06-11?")
                .with_uri(attr::AUTHOR, POTTER)
                .with_uri(attr::AUTHOR, GRANGER)
                .with_uri(attr::CONCEPT, CONCEPT)
                .with_uri(attr::GRANT, UNKNOWN_GRANT),
        )
        .unwrap(),
    ]
}

pub fn liskov_organizations() -> QueryResults {
    QueryResults::new(
        vec!["org".into(), "name".into(), "type".into()],
        vec![
            Solution::new()
                .bind_uri("org", "http://example.com/org/cs")
                .bind_literal("name", "Computer Science")
                .bind_uri("type", vivo::DEPARTMENT),
            Solution::new()
                .bind_uri("org", "http://example.com/org/mit")
                .bind_literal("name", "MIT")
                .bind_uri("type", vivo::UNIVERSITY),
        ],
    )
}

pub fn liskov_countries() -> QueryResults {
    QueryResults::new(
        vec!["country".into(), "label".into()],
        vec![Solution::new()
            .bind_uri("country", "http://sws.geonames.org/6252001/")
            .bind_literal("label", "United States")],
    )
}
