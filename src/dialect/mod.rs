//! Registry dialects.
//!
//! A dialect supplies the declarative tables a [`Catalog`](crate::schema::Catalog)
//! is built from: the attribute table, the status vocabularies, and one
//! template per object type. The dialect is chosen once, at install time;
//! nothing below this module looks at which one is running.

mod apnic;
mod attributes;
mod ripe;

pub use apnic::Apnic;
pub use ripe::Ripe;

use crate::error::SchemaError;
use crate::schema::attribute::AttributeType;
use crate::schema::template::{AttributeTemplate, KeyRole, ObjectTemplate, Occurrence, Requirement};
use crate::syntax::StatusVocabulary;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The registry whose object schema is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Apnic,
    Ripe,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Apnic, Dialect::Ripe];

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Apnic => "APNIC",
            Dialect::Ripe => "RIPE",
        }
    }

    pub fn provider(self) -> &'static dyn DialectProvider {
        match self {
            Dialect::Apnic => &Apnic,
            Dialect::Ripe => &Ripe,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apnic" => Ok(Dialect::Apnic),
            "ripe" => Ok(Dialect::Ripe),
            _ => Err(SchemaError::UnknownDialect(s.to_string())),
        }
    }
}

/// Source of one dialect's declarative tables.
pub trait DialectProvider: Send + Sync {
    fn dialect(&self) -> Dialect;

    /// Allowed `status` values per object type.
    fn status_vocabulary(&self) -> &'static StatusVocabulary;

    /// Every attribute type, in table order.
    fn attributes(&self) -> Vec<AttributeType>;

    /// One template per object type.
    fn templates(&self) -> Vec<ObjectTemplate>;
}

// Key role sets used by the template tables
pub(crate) const PRIMARY: &[KeyRole] = &[KeyRole::PrimaryKey];
pub(crate) const LOOKUP: &[KeyRole] = &[KeyRole::LookupKey];
pub(crate) const INVERSE: &[KeyRole] = &[KeyRole::InverseKey];
pub(crate) const LOOKUP_INVERSE: &[KeyRole] = &[KeyRole::LookupKey, KeyRole::InverseKey];
pub(crate) const NONE: &[KeyRole] = &[];

pub(crate) const fn mandatory(
    attribute: &'static str,
    occurrence: Occurrence,
    keys: &'static [KeyRole],
) -> AttributeTemplate {
    AttributeTemplate::new(attribute, Requirement::Mandatory, occurrence, keys)
}

pub(crate) const fn optional(
    attribute: &'static str,
    occurrence: Occurrence,
    keys: &'static [KeyRole],
) -> AttributeTemplate {
    AttributeTemplate::new(attribute, Requirement::Optional, occurrence, keys)
}

pub(crate) const fn generated(attribute: &'static str) -> AttributeTemplate {
    AttributeTemplate::new(attribute, Requirement::Generated, Occurrence::Single, NONE)
}

pub(crate) fn build_templates(
    table: &[(crate::object::ObjectType, &'static [AttributeTemplate])],
) -> Vec<ObjectTemplate> {
    table
        .iter()
        .map(|(object_type, entries)| ObjectTemplate::new(*object_type, entries.to_vec()))
        .collect()
}
