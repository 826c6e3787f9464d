//! Attribute type definitions.
//!
//! One [`AttributeType`] per named RPSL attribute. The canonical name is the
//! identity key; the two-letter flag is the short alias used by legacy
//! `*xx:` notation.

use crate::documentation::Documentation;
use crate::object::ObjectType;
use crate::syntax::Syntax;
use log::trace;
use serde::{Deserialize, Serialize};

/// Whether a raw value is one value or a comma-separated list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    Single,
    List,
}

/// A named RPSL attribute.
#[derive(Debug)]
pub struct AttributeType {
    /// Canonical lowercase name, e.g. `inetnum`
    pub name: &'static str,
    /// Two-letter short form
    pub flag: &'static str,
    /// Value syntax
    pub syntax: &'static Syntax,
    /// Whether values split on commas
    pub cardinality: Cardinality,
    /// Object types a value of this attribute may refer to
    pub references: &'static [ObjectType],
    /// Description, possibly per object type
    pub documentation: Documentation,
}

impl AttributeType {
    /// Split a raw value into the sub-values this attribute carries.
    ///
    /// List attributes split on commas, trimming each piece and dropping
    /// empty ones. Single attributes yield the value unchanged.
    pub fn split_value(&self, value: &str) -> Vec<String> {
        match self.cardinality {
            Cardinality::Single => vec![value.to_string()],
            Cardinality::List => value
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Check a value against this attribute's syntax in the given object type.
    ///
    /// List values must contain at least one sub-value and every sub-value
    /// must match.
    pub fn is_valid(&self, object_type: ObjectType, value: &str) -> bool {
        let valid = match self.cardinality {
            Cardinality::Single => self.syntax.matches(object_type, value),
            Cardinality::List => {
                let parts = self.split_value(value);
                !parts.is_empty()
                    && parts
                        .iter()
                        .all(|part| self.syntax.matches(object_type, part))
            }
        };
        if !valid {
            trace!(
                "Rejected {} value '{}' in {}",
                self.name, value, object_type
            );
        }
        valid
    }

    /// Object types a value may refer to.
    ///
    /// `auth` values carrying an MD5 password hash refer to nothing.
    pub fn references(&self, value: &str) -> &'static [ObjectType] {
        if self.name == "auth" && is_md5_password(value) {
            return &[];
        }
        self.references
    }

    pub fn describe(&self, object_type: ObjectType) -> &'static str {
        self.documentation.describe(object_type)
    }

    pub fn describe_syntax(&self, object_type: ObjectType) -> String {
        self.syntax.describe(object_type)
    }
}

fn is_md5_password(value: &str) -> bool {
    value
        .trim_start()
        .get(..6)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("MD5-PW"))
}
