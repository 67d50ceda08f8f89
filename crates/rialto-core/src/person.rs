//! Person variant and its enrichment buckets
//!
//! A person is built from its attribute bag with every bucket empty. The three
//! `set_*_info` calls each replace one group of buckets wholesale from a
//! classification query result. Rows that cannot be classified are dropped,
//! never defaulted into a bucket.

use crate::query::{QueryResults, Solution};
use crate::resource::BaseResource;
use crate::term::Labeled;
use crate::vocab::{attr, vivo};
use tracing::debug;

/// Variables bound by the organization hierarchy query
pub const ORG_VAR: &str = "org";
pub const NAME_VAR: &str = "name";
pub const TYPE_VAR: &str = "type";

/// Variables bound by the countries query
pub const COUNTRY_VAR: &str = "country";
pub const LABEL_VAR: &str = "label";

/// Variable bound by the subtypes query
pub const SUBTYPE_VAR: &str = "subtype";

/// Which organization bucket a hierarchy row lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgBucket {
    Institution,
    School,
    Department,
    Institute,
}

impl OrgBucket {
    /// Classify an organization class URI. `None` means the row is dropped.
    pub fn for_class(class: &str) -> Option<Self> {
        match class {
            vivo::UNIVERSITY => Some(Self::Institution),
            vivo::SCHOOL => Some(Self::School),
            vivo::DEPARTMENT => Some(Self::Department),
            vivo::INSTITUTE => Some(Self::Institute),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    base: BaseResource,

    department_orgs: Vec<Labeled>,
    school_orgs: Vec<Labeled>,
    institution_orgs: Vec<Labeled>,
    institute_orgs: Vec<Labeled>,
    countries: Vec<Labeled>,
    subtypes: Vec<Labeled>,

    organizations_set: bool,
    countries_set: bool,
}

impl Person {
    pub fn new(base: BaseResource) -> Self {
        Self {
            base,
            department_orgs: Vec::new(),
            school_orgs: Vec::new(),
            institution_orgs: Vec::new(),
            institute_orgs: Vec::new(),
            countries: Vec::new(),
            subtypes: Vec::new(),
            organizations_set: false,
            countries_set: false,
        }
    }

    pub fn base(&self) -> &BaseResource {
        &self.base
    }

    pub fn subject(&self) -> &str {
        self.base.subject()
    }

    pub fn firstname(&self) -> Option<&str> {
        self.base.first_value(attr::FIRSTNAME)
    }

    pub fn lastname(&self) -> Option<&str> {
        self.base.first_value(attr::LASTNAME)
    }

    /// "Firstname Lastname", using whichever parts are present
    pub fn full_name(&self) -> String {
        [self.firstname(), self.lastname()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether the organization buckets have been populated by enrichment
    pub fn organizations_set(&self) -> bool {
        self.organizations_set
    }

    /// Whether `countries` has been populated by enrichment
    pub fn countries_set(&self) -> bool {
        self.countries_set
    }

    pub fn department_orgs(&self) -> &[Labeled] {
        &self.department_orgs
    }

    pub fn school_orgs(&self) -> &[Labeled] {
        &self.school_orgs
    }

    pub fn institution_orgs(&self) -> &[Labeled] {
        &self.institution_orgs
    }

    pub fn institute_orgs(&self) -> &[Labeled] {
        &self.institute_orgs
    }

    pub fn countries(&self) -> &[Labeled] {
        &self.countries
    }

    pub fn subtypes(&self) -> &[Labeled] {
        &self.subtypes
    }

    /// Replace the four organization buckets from `{org, name, type}` rows.
    pub fn set_position_organization_info(&mut self, results: &QueryResults) {
        let mut departments = Vec::new();
        let mut schools = Vec::new();
        let mut institutions = Vec::new();
        let mut institutes = Vec::new();

        for row in results.solutions() {
            let Some(labeled) = labeled_row(row, ORG_VAR, NAME_VAR) else {
                debug!(subject = %self.subject(), "Dropping organization row without org or name");
                continue;
            };

            let Some(class) = row.value(TYPE_VAR) else {
                debug!(subject = %self.subject(), org = %labeled.uri, "Dropping organization row without a type");
                continue;
            };

            match OrgBucket::for_class(class) {
                Some(OrgBucket::Institution) => institutions.push(labeled),
                Some(OrgBucket::School) => schools.push(labeled),
                Some(OrgBucket::Department) => departments.push(labeled),
                Some(OrgBucket::Institute) => institutes.push(labeled),
                None => {
                    debug!(subject = %self.subject(), org = %labeled.uri, class, "Dropping organization row with unclassified type");
                }
            }
        }

        self.department_orgs = departments;
        self.school_orgs = schools;
        self.institution_orgs = institutions;
        self.institute_orgs = institutes;
        self.organizations_set = true;
    }

    /// Replace `countries` from `{country, label}` rows.
    pub fn set_countries_info(&mut self, results: &QueryResults) {
        self.countries = results
            .solutions()
            .iter()
            .filter_map(|row| labeled_row(row, COUNTRY_VAR, LABEL_VAR))
            .collect();
        self.countries_set = true;
    }

    /// Replace `subtypes` from `{subtype}` rows, deriving each label from the URI.
    pub fn set_person_subtypes_info(&mut self, results: &QueryResults) {
        self.subtypes = results
            .solutions()
            .iter()
            .filter_map(|row| row.value(SUBTYPE_VAR))
            .map(|uri| Labeled::new(uri, subtype_label(uri)))
            .collect();
    }
}

fn labeled_row(row: &Solution, uri_var: &str, label_var: &str) -> Option<Labeled> {
    Some(Labeled::new(row.value(uri_var)?, row.value(label_var)?))
}

/// Final path segment of `uri` with its first letter capitalized.
///
/// `http://sul.stanford.edu/rialto/ontology#Faculty` becomes `Faculty`,
/// `http://example.com/types/staff/` becomes `Staff`.
pub fn subtype_label(uri: &str) -> String {
    let segment = uri
        .trim_end_matches(['/', '#'])
        .rsplit(['/', '#'])
        .next()
        .unwrap_or_default();

    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
