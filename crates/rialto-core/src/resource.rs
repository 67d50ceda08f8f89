//! Attribute bags and the base resource
//!
//! An [`AttributeBag`] is the raw, unvalidated shape a repository hands over:
//! an optional subject plus named attributes, each an ordered list of
//! [`Term`]s. [`BaseResource`] is the validated form every typed variant wraps.

use crate::term::Term;
use crate::vocab::{self, attr};
use std::collections::BTreeMap;
use thiserror::Error;

/// Failure to build a resource from an attribute bag.
///
/// Fatal to the one resource being built; callers decide whether the rest of
/// a batch continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("resource has no subject identifier")]
    MissingSubject,

    #[error("subject '{subject}' is not an absolute URI: {reason}")]
    InvalidSubject { subject: String, reason: String },
}

pub type ConstructionResult<T> = Result<T, ConstructionError>;

/// Raw subject + attribute mapping, as produced by a repository scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeBag {
    pub subject: Option<String>,
    pub attributes: BTreeMap<String, Vec<Term>>,
}

impl AttributeBag {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            attributes: BTreeMap::new(),
        }
    }

    /// A bag without a subject; only useful for exercising construction errors
    /// or for accumulating values before the subject is known.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Append a value to `name`, keeping any values already present
    pub fn push(&mut self, name: impl Into<String>, value: Term) {
        self.attributes.entry(name.into()).or_default().push(value);
    }

    /// Builder form of [`AttributeBag::push`]
    pub fn with(mut self, name: impl Into<String>, value: Term) -> Self {
        self.push(name, value);
        self
    }

    pub fn with_uri(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(name, Term::uri(value))
    }

    pub fn with_literal(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(name, Term::literal(value))
    }

    pub fn with_type(self, class: impl Into<String>) -> Self {
        self.with_uri(attr::TYPE, class)
    }
}

/// A subject and its attributes, validated.
///
/// Read-only once built: there are no `&mut self` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseResource {
    subject: String,
    types: Vec<String>,
    attributes: BTreeMap<String, Vec<Term>>,
}

impl BaseResource {
    /// Validate the subject and capture the declared classes.
    pub fn new(
        subject: impl Into<String>,
        attributes: BTreeMap<String, Vec<Term>>,
    ) -> ConstructionResult<Self> {
        let subject = subject.into();
        validate_subject(&subject)?;

        let mut types: Vec<String> = Vec::new();
        for class in attributes.get(attr::TYPE).into_iter().flatten() {
            if !types.iter().any(|t| t == class.value()) {
                types.push(class.value().to_string());
            }
        }

        Ok(Self {
            subject,
            types,
            attributes,
        })
    }

    pub fn from_bag(bag: AttributeBag) -> ConstructionResult<Self> {
        let subject = bag.subject.ok_or(ConstructionError::MissingSubject)?;
        Self::new(subject, bag.attributes)
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Declared class URIs, in first-seen order. Empty when `type` is unset.
    pub fn resource_types(&self) -> &[String] {
        &self.types
    }

    /// Title values. Empty when `title` is unset.
    pub fn titles(&self) -> &[Term] {
        self.values_of(attr::TITLE)
    }

    /// All values of `name` in input order, duplicates included.
    pub fn values_of(&self, name: &str) -> &[Term] {
        self.attributes
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lexical value of the first value of `name`
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.values_of(name).first().map(Term::value)
    }

    /// True iff the declared classes include a bibliographic document class.
    pub fn is_publication(&self) -> bool {
        vocab::intersects(&self.types, vocab::PUBLICATION_CLASSES)
    }
}

fn validate_subject(subject: &str) -> ConstructionResult<()> {
    if subject.trim().is_empty() {
        return Err(ConstructionError::MissingSubject);
    }

    url::Url::parse(subject)
        .map(|_| ())
        .map_err(|e| ConstructionError::InvalidSubject {
            subject: subject.to_string(),
            reason: e.to_string(),
        })
}
