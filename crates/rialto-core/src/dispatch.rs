//! Type dispatch from declared classes to a typed resource
//!
//! Classification happens once, when the resource is built. Precedence is
//! Person, then Organization, then Publication; anything else stays a
//! generic resource.

use crate::organization::Organization;
use crate::person::Person;
use crate::publication::Publication;
use crate::resource::{AttributeBag, BaseResource, ConstructionError, ConstructionResult};
use crate::term::Term;
use crate::vocab::{self, attr};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Person,
    Organization,
    Publication,
    Generic,
}

impl ResourceKind {
    /// Pick the variant for a set of declared class URIs.
    pub fn classify<S: AsRef<str>>(types: &[S]) -> Self {
        if vocab::intersects(types, vocab::PERSON_CLASSES) {
            Self::Person
        } else if vocab::intersects(types, vocab::ORGANIZATION_CLASSES) {
            Self::Organization
        } else if vocab::intersects(types, vocab::PUBLICATION_CLASSES) {
            Self::Publication
        } else {
            Self::Generic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Organization => "Organization",
            Self::Publication => "Publication",
            Self::Generic => "Resource",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Person(Person),
    Organization(Organization),
    Publication(Publication),
    Generic(BaseResource),
}

impl Resource {
    /// Validate and classify a subject with its attributes.
    pub fn new(
        subject: impl Into<String>,
        attributes: BTreeMap<String, Vec<Term>>,
    ) -> ConstructionResult<Self> {
        Ok(Self::from_base(BaseResource::new(subject, attributes)?))
    }

    pub fn from_bag(bag: AttributeBag) -> ConstructionResult<Self> {
        Ok(Self::from_base(BaseResource::from_bag(bag)?))
    }

    pub fn from_base(base: BaseResource) -> Self {
        match ResourceKind::classify(base.resource_types()) {
            ResourceKind::Person => Self::Person(Person::new(base)),
            ResourceKind::Organization => Self::Organization(Organization::new(base)),
            ResourceKind::Publication => Self::Publication(Publication::new(base)),
            ResourceKind::Generic => Self::Generic(base),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Person(_) => ResourceKind::Person,
            Self::Organization(_) => ResourceKind::Organization,
            Self::Publication(_) => ResourceKind::Publication,
            Self::Generic(_) => ResourceKind::Generic,
        }
    }

    pub fn base(&self) -> &BaseResource {
        match self {
            Self::Person(p) => p.base(),
            Self::Organization(o) => o.base(),
            Self::Publication(p) => p.base(),
            Self::Generic(b) => b,
        }
    }

    pub fn subject(&self) -> &str {
        self.base().subject()
    }

    pub fn resource_types(&self) -> &[String] {
        self.base().resource_types()
    }

    pub fn titles(&self) -> &[Term] {
        self.base().titles()
    }

    pub fn values_of(&self, name: &str) -> &[Term] {
        self.base().values_of(name)
    }

    pub fn is_publication(&self) -> bool {
        self.base().is_publication()
    }

    /// Label used when another resource refers to this one.
    pub fn display_label(&self) -> String {
        match self {
            Self::Person(p) => {
                let name = p.full_name();
                if name.is_empty() {
                    p.subject().to_string()
                } else {
                    name
                }
            }
            Self::Organization(o) => o.name().unwrap_or(o.subject()).to_string(),
            _ => {
                let base = self.base();
                base.first_value(attr::LABEL)
                    .or_else(|| base.titles().first().map(Term::value))
                    .unwrap_or(base.subject())
                    .to_string()
            }
        }
    }

    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Self::Person(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_organization(&self) -> Option<&Organization> {
        match self {
            Self::Organization(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_publication(&self) -> Option<&Publication> {
        match self {
            Self::Publication(p) => Some(p),
            _ => None,
        }
    }
}

impl TryFrom<AttributeBag> for Resource {
    type Error = ConstructionError;

    fn try_from(bag: AttributeBag) -> Result<Self, Self::Error> {
        Self::from_bag(bag)
    }
}

impl From<Person> for Resource {
    fn from(p: Person) -> Self {
        Self::Person(p)
    }
}

impl From<Organization> for Resource {
    fn from(o: Organization) -> Self {
        Self::Organization(o)
    }
}

impl From<Publication> for Resource {
    fn from(p: Publication) -> Self {
        Self::Publication(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{bibo, foaf, vivo};

    #[test]
    fn test_classify_precedence() {
        assert_eq!(ResourceKind::classify(&[foaf::PERSON]), ResourceKind::Person);
        assert_eq!(
            ResourceKind::classify(&[bibo::DOCUMENT, foaf::PERSON]),
            ResourceKind::Person
        );
        assert_eq!(
            ResourceKind::classify(&[bibo::DOCUMENT, vivo::SCHOOL]),
            ResourceKind::Organization
        );
        assert_eq!(
            ResourceKind::classify(&[bibo::ACADEMIC_ARTICLE]),
            ResourceKind::Publication
        );
        assert_eq!(
            ResourceKind::classify(&["http://example.com/Thing"]),
            ResourceKind::Generic
        );
        assert_eq!(ResourceKind::classify::<&str>(&[]), ResourceKind::Generic);
    }

    #[test]
    fn test_person_dispatch() {
        let bag = AttributeBag::new("http://example.com/record1").with_type(foaf::PERSON);
        let resource = Resource::from_bag(bag).unwrap();

        assert_eq!(resource.kind(), ResourceKind::Person);
        assert_eq!(resource.subject(), "http://example.com/record1");
        assert!(resource.as_person().is_some());
    }

    #[test]
    fn test_missing_subject() {
        let bag = AttributeBag::anonymous().with_type(foaf::PERSON);
        assert_eq!(
            Resource::try_from(bag).unwrap_err(),
            ConstructionError::MissingSubject
        );
    }

    #[test]
    fn test_display_labels() {
        let person = Resource::from_bag(
            AttributeBag::new("http://example.com/p")
                .with_type(foaf::PERSON)
                .with_literal(attr::FIRSTNAME, "Harry")
                .with_literal(attr::LASTNAME, "Potter"),
        )
        .unwrap();
        assert_eq!(person.display_label(), "Harry Potter");

        let concept = Resource::from_bag(
            AttributeBag::new("http://example.com/c").with_literal(attr::LABEL, "Magic"),
        )
        .unwrap();
        assert_eq!(concept.display_label(), "Magic");

        let grant = Resource::from_bag(
            AttributeBag::new("http://example.com/g").with_literal(attr::TITLE, "Learning Magic"),
        )
        .unwrap();
        assert_eq!(grant.display_label(), "Learning Magic");

        let bare = Resource::from_bag(AttributeBag::new("http://example.com/x")).unwrap();
        assert_eq!(bare.display_label(), "http://example.com/x");
    }
}
