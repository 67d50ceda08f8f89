//! Flat search document

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field name of the document key.
pub const ID_FIELD: &str = "id";

/// A flat field set sent to the search index, keyed by subject in `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        let mut doc = Self::new();
        doc.set(ID_FIELD, id.into());
        doc
    }

    pub fn id(&self) -> Option<&str> {
        self.get_str(ID_FIELD)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// String items of a list field
    pub fn get_strings(&self, field: &str) -> Option<Vec<&str>> {
        self.fields
            .get(field)?
            .as_array()
            .map(|items| items.iter().filter_map(Value::as_str).collect())
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}
