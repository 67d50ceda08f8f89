//! Publication variant
//!
//! Scalar fields are read straight from the attribute bag. The relationship
//! sequences (authors, concepts, grants) need labels from other resources and
//! are filled in by the pipeline before projection.

use crate::resource::BaseResource;
use crate::term::{Labeled, Term};
use crate::vocab::attr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    base: BaseResource,
    created_year: Option<i32>,

    pub authors: Vec<Labeled>,
    pub concepts: Vec<Labeled>,
    pub grants: Vec<Labeled>,
}

impl Publication {
    pub fn new(base: BaseResource) -> Self {
        let created_year = base.first_value(attr::CREATED).and_then(leading_year);
        Self {
            base,
            created_year,
            authors: Vec::new(),
            concepts: Vec::new(),
            grants: Vec::new(),
        }
    }

    pub fn with_authors(mut self, authors: Vec<Labeled>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_concepts(mut self, concepts: Vec<Labeled>) -> Self {
        self.concepts = concepts;
        self
    }

    pub fn with_grants(mut self, grants: Vec<Labeled>) -> Self {
        self.grants = grants;
        self
    }

    pub fn base(&self) -> &BaseResource {
        &self.base
    }

    pub fn subject(&self) -> &str {
        self.base.subject()
    }

    pub fn title(&self) -> Option<&str> {
        self.base.first_value(attr::TITLE)
    }

    /// Creation date exactly as ingested (`"2004-06-11?"`, `"circa 1990"`, ...)
    pub fn created(&self) -> Option<&str> {
        self.base.first_value(attr::CREATED)
    }

    pub fn created_year(&self) -> Option<i32> {
        self.created_year
    }

    pub fn identifiers(&self) -> Vec<&str> {
        self.base
            .values_of(attr::IDENTIFIER)
            .iter()
            .map(Term::value)
            .collect()
    }

    pub fn doi(&self) -> Option<&str> {
        self.base.first_value(attr::DOI)
    }

    pub fn abstract_text(&self) -> Option<&str> {
        self.base.first_value(attr::ABSTRACT)
    }

    pub fn publisher(&self) -> Option<&str> {
        self.base.first_value(attr::PUBLISHER)
    }

    pub fn description(&self) -> Option<&str> {
        self.base.first_value(attr::DESCRIPTION)
    }

    /// Subjects referenced by `author`, in input order
    pub fn author_subjects(&self) -> Vec<&str> {
        uri_values(&self.base, attr::AUTHOR)
    }

    pub fn concept_subjects(&self) -> Vec<&str> {
        uri_values(&self.base, attr::CONCEPT)
    }

    pub fn grant_subjects(&self) -> Vec<&str> {
        uri_values(&self.base, attr::GRANT)
    }
}

fn uri_values<'a>(base: &'a BaseResource, name: &str) -> Vec<&'a str> {
    base.values_of(name)
        .iter()
        .filter(|t| t.is_uri())
        .map(Term::value)
        .collect()
}

/// Year from a date string that starts with exactly four digits.
fn leading_year(created: &str) -> Option<i32> {
    let created = created.trim();
    let digits = created.chars().take_while(char::is_ascii_digit).count();
    if digits != 4 {
        return None;
    }
    created[..4].parse().ok()
}
