//! SPARQL query results
//!
//! Classification data and attribute bags both arrive as SPARQL 1.1 JSON
//! results (`application/sparql-results+json`). This module parses that
//! format into [`QueryResults`] and builds the query text whose variables the
//! person enrichment reads.

use crate::resource::AttributeBag;
use crate::term::Term;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryResultsError {
    #[error("Malformed query results: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unsupported binding type '{kind}' for variable '{var}'")]
    UnsupportedBinding { var: String, kind: String },
}

pub type QueryResultsResult<T> = Result<T, QueryResultsError>;

// ============================================================================
// Wire format
// ============================================================================

#[derive(Deserialize)]
struct RawResults {
    #[serde(default)]
    head: RawHead,
    results: RawBindings,
}

#[derive(Deserialize, Default)]
struct RawHead {
    #[serde(default)]
    vars: Vec<String>,
}

#[derive(Deserialize)]
struct RawBindings {
    #[serde(default)]
    bindings: Vec<HashMap<String, RawValue>>,
}

#[derive(Deserialize)]
struct RawValue {
    #[serde(rename = "type")]
    kind: String,
    value: String,
}

// ============================================================================
// Parsed results
// ============================================================================

/// One row of variable bindings. Unbound variables are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    bindings: BTreeMap<String, Term>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, var: impl Into<String>, term: Term) -> Self {
        self.bindings.insert(var.into(), term);
        self
    }

    pub fn bind_uri(self, var: impl Into<String>, value: impl Into<String>) -> Self {
        self.bind(var, Term::uri(value))
    }

    pub fn bind_literal(self, var: impl Into<String>, value: impl Into<String>) -> Self {
        self.bind(var, Term::literal(value))
    }

    pub fn get(&self, var: &str) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Lexical value of `var`, if bound
    pub fn value(&self, var: &str) -> Option<&str> {
        self.get(var).map(Term::value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A parsed SELECT result set: projected variables plus solution rows in
/// the order the endpoint returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResults {
    vars: Vec<String>,
    solutions: Vec<Solution>,
}

impl QueryResults {
    pub fn new(vars: Vec<String>, solutions: Vec<Solution>) -> Self {
        Self { vars, solutions }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> QueryResultsResult<Self> {
        let raw: RawResults = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawResults) -> QueryResultsResult<Self> {
        let mut solutions = Vec::with_capacity(raw.results.bindings.len());

        for row in raw.results.bindings {
            let mut solution = Solution::new();
            for (var, value) in row {
                let term = match value.kind.as_str() {
                    "uri" => Term::Uri(value.value),
                    "literal" | "typed-literal" => Term::Literal(value.value),
                    "bnode" => Term::Uri(format!("_:{}", value.value)),
                    other => {
                        return Err(QueryResultsError::UnsupportedBinding {
                            var,
                            kind: other.to_string(),
                        })
                    }
                };
                solution = solution.bind(var, term);
            }
            solutions.push(solution);
        }

        Ok(Self {
            vars: raw.head.vars,
            solutions,
        })
    }

    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Group rows into one attribute bag per value of `subject_var`.
    ///
    /// Subjects keep the order of their first row; each other bound variable
    /// becomes an attribute and receives its values in row order, repeats
    /// included. A row with `subject_var` unbound yields its own bag with no
    /// subject, so building a resource from it fails.
    pub fn into_attribute_bags(self, subject_var: &str) -> Vec<AttributeBag> {
        let mut bags: Vec<AttributeBag> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for solution in self.solutions {
            let slot = match solution.value(subject_var) {
                Some(subject) => match index.get(subject) {
                    Some(&i) => i,
                    None => {
                        index.insert(subject.to_string(), bags.len());
                        bags.push(AttributeBag::new(subject));
                        bags.len() - 1
                    }
                },
                None => {
                    bags.push(AttributeBag::anonymous());
                    bags.len() - 1
                }
            };

            for (var, term) in solution.bindings {
                if var != subject_var {
                    bags[slot].push(var, term);
                }
            }
        }

        bags
    }
}

/// Query text for the three person classification queries.
///
/// Each query binds exactly the variables the matching `Person::set_*_info`
/// reads (see the `*_VAR` constants in [`crate::person`]).
pub mod sparql {
    use crate::vocab::{foaf, vivo, DBO_COUNTRY, RDF_TYPE, SKOS_PREF_LABEL};

    /// `{org, name, type}` for every organization the person holds a position
    /// in, plus that organization's ancestors.
    pub fn position_organizations(subject: &str) -> String {
        format!(
            "SELECT DISTINCT ?org ?name ?type WHERE {{ \
             <{subject}> <{related_by}> ?position . \
             ?position <{rdf_type}> <{position}> ; <{relates}> ?direct . \
             ?direct <{rdf_type}> <{organization}> . \
             ?direct <http://purl.obolibrary.org/obo/BFO_0000050>* ?org . \
             ?org <{pref_label}> ?name . \
             OPTIONAL {{ ?org <{rdf_type}> ?type . \
             FILTER(?type IN (<{university}>, <{school}>, <{department}>, <{institute}>)) }} }}",
            related_by = vivo::RELATED_BY,
            rdf_type = RDF_TYPE,
            position = vivo::POSITION,
            relates = vivo::RELATES,
            organization = foaf::ORGANIZATION,
            pref_label = SKOS_PREF_LABEL,
            university = vivo::UNIVERSITY,
            school = vivo::SCHOOL,
            department = vivo::DEPARTMENT,
            institute = vivo::INSTITUTE,
        )
    }

    /// `{country, label}` for the person's countries.
    pub fn countries(subject: &str) -> String {
        format!(
            "SELECT DISTINCT ?country ?label WHERE {{ \
             <{subject}> <{country_pred}> ?country . \
             ?country <{pref_label}> ?label }}",
            country_pred = DBO_COUNTRY,
            pref_label = SKOS_PREF_LABEL,
        )
    }

    /// `{subtype}` for every class of the person other than `foaf:Person`.
    pub fn person_subtypes(subject: &str) -> String {
        format!(
            "SELECT DISTINCT ?subtype WHERE {{ \
             <{subject}> <{rdf_type}> ?subtype . \
             FILTER(?subtype NOT IN (<{person}>, <{agent}>)) }}",
            rdf_type = RDF_TYPE,
            person = foaf::PERSON,
            agent = foaf::AGENT,
        )
    }
}
