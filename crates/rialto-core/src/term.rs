//! Attribute values and labeled references

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attribute value.
///
/// The URI-reference / literal distinction is kept as-is from ingestion
/// through projection; nothing in this crate converts one into the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Term {
    /// An IRI reference to another resource or class
    Uri(String),
    /// A plain literal string
    Literal(String),
}

impl Term {
    pub fn uri(value: impl Into<String>) -> Self {
        Self::Uri(value.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// The lexical value, regardless of kind
    pub fn value(&self) -> &str {
        match self {
            Self::Uri(v) | Self::Literal(v) => v,
        }
    }

    pub fn is_uri(&self) -> bool {
        matches!(self, Self::Uri(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// A (URI, display label) pair.
///
/// Every enrichment bucket and every relationship sequence is an ordered
/// `Vec<Labeled>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Labeled {
    pub uri: String,
    pub label: String,
}

impl Labeled {
    pub fn new(uri: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            label: label.into(),
        }
    }
}

/// Split a labeled sequence into its parallel URI and label columns.
pub fn unzip_labeled(items: &[Labeled]) -> (Vec<String>, Vec<String>) {
    items
        .iter()
        .map(|l| (l.uri.clone(), l.label.clone()))
        .unzip()
}
