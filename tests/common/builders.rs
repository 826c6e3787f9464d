//! Test data builders for RPSL objects.
//!
//! Start from a well-formed fixture and change it one attribute at a time
//! to provoke a specific finding.

use super::fixtures;
use rpsl_schema::{ObjectType, RpslAttribute, RpslObject};

/// Fluent builder over an [`RpslObject`].
#[derive(Debug, Clone)]
pub struct ObjectBuilder {
    object_type: ObjectType,
    attributes: Vec<RpslAttribute>,
}

impl ObjectBuilder {
    /// Start from RPSL text. Panics if the text does not parse.
    pub fn from_text(text: &str) -> Self {
        let object = RpslObject::parse(text)
            .unwrap_or_else(|e| panic!("Failed to parse fixture: {}\n{}", e, text));
        Self {
            object_type: object.object_type(),
            attributes: object.attributes().to_vec(),
        }
    }

    pub fn mntner() -> Self {
        Self::from_text(fixtures::MNTNER)
    }

    pub fn person() -> Self {
        Self::from_text(fixtures::PERSON)
    }

    pub fn inetnum() -> Self {
        Self::from_text(fixtures::INETNUM)
    }

    pub fn aut_num() -> Self {
        Self::from_text(fixtures::AUT_NUM)
    }

    pub fn route() -> Self {
        Self::from_text(fixtures::ROUTE)
    }

    pub fn route6() -> Self {
        Self::from_text(fixtures::ROUTE6)
    }

    pub fn route_set() -> Self {
        Self::from_text(fixtures::ROUTE_SET)
    }

    pub fn rtr_set() -> Self {
        Self::from_text(fixtures::RTR_SET)
    }

    /// Append an attribute line.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.attributes.push(RpslAttribute::new(name, value));
        self
    }

    /// Remove every line with the given name.
    pub fn without(mut self, name: &str) -> Self {
        self.attributes
            .retain(|attribute| !attribute.name.eq_ignore_ascii_case(name));
        self
    }

    /// Replace the value of the first line with the given name and drop
    /// any further lines with that name.
    pub fn replace(mut self, name: &str, value: &str) -> Self {
        let mut seen = false;
        self.attributes.retain_mut(|attribute| {
            if !attribute.name.eq_ignore_ascii_case(name) {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            attribute.value = value.to_string();
            true
        });
        assert!(seen, "No '{}' attribute to replace", name);
        self
    }

    /// Index the next appended attribute will have.
    pub fn next_index(&self) -> usize {
        self.attributes.len()
    }

    /// Index of the first line with the given name.
    pub fn index_of(&self, name: &str) -> usize {
        self.attributes
            .iter()
            .position(|attribute| attribute.name.eq_ignore_ascii_case(name))
            .unwrap_or_else(|| panic!("No '{}' attribute", name))
    }

    pub fn build(self) -> RpslObject {
        RpslObject::new(self.object_type, self.attributes)
    }
}
