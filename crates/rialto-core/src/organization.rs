//! Organization variant

use crate::resource::BaseResource;
use crate::vocab::{self, attr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    base: BaseResource,
}

impl Organization {
    pub fn new(base: BaseResource) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseResource {
        &self.base
    }

    pub fn subject(&self) -> &str {
        self.base.subject()
    }

    pub fn name(&self) -> Option<&str> {
        self.base.first_value(attr::NAME)
    }

    /// The explicit `subtype`, else the first declared organization subclass
    pub fn subtype(&self) -> Option<&str> {
        self.base.first_value(attr::SUBTYPE).or_else(|| {
            self.base
                .resource_types()
                .iter()
                .map(String::as_str)
                .find(|t| vocab::ORGANIZATION_SUBTYPES.contains(t))
        })
    }
}
