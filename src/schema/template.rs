//! Object templates: which attributes each object type carries.

use crate::object::ObjectType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Write;

/// Whether an attribute must appear on an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    Mandatory,
    Optional,
    /// Set by the registry; submitted values are not syntax-checked
    Generated,
}

/// How many instances of an attribute an object may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occurrence {
    Single,
    Multiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyRole {
    PrimaryKey,
    LookupKey,
    InverseKey,
}

/// One attribute entry in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeTemplate {
    /// Canonical attribute name
    pub attribute: &'static str,
    pub requirement: Requirement,
    pub occurrence: Occurrence,
    pub keys: &'static [KeyRole],
}

impl AttributeTemplate {
    pub const fn new(
        attribute: &'static str,
        requirement: Requirement,
        occurrence: Occurrence,
        keys: &'static [KeyRole],
    ) -> Self {
        Self {
            attribute,
            requirement,
            occurrence,
            keys,
        }
    }

    pub fn has_key(&self, role: KeyRole) -> bool {
        self.keys.contains(&role)
    }

    fn render_line(&self, out: &mut String) {
        let requirement = match self.requirement {
            Requirement::Mandatory => "[mandatory]",
            Requirement::Optional => "[optional]",
            Requirement::Generated => "[generated]",
        };
        let occurrence = match self.occurrence {
            Occurrence::Single => "[single]",
            Occurrence::Multiple => "[multiple]",
        };
        let primary = self.has_key(KeyRole::PrimaryKey);
        let lookup = self.has_key(KeyRole::LookupKey);
        let keys = match (primary, lookup, self.has_key(KeyRole::InverseKey)) {
            (true, _, _) => "[primary/lookup key]",
            (false, true, true) => "[lookup key, inverse key]",
            (false, true, false) => "[lookup key]",
            (false, false, true) => "[inverse key]",
            (false, false, false) => "[ ]",
        };
        let name = format!("{}:", self.attribute);
        let _ = writeln!(out, "{name:<20}{requirement:<13}{occurrence:<13}{keys}");
    }
}

/// The attribute layout of one object type.
///
/// Derived index sets are computed once, at construction.
#[derive(Debug, Clone)]
pub struct ObjectTemplate {
    object_type: ObjectType,
    entries: Vec<AttributeTemplate>,
    all: BTreeSet<&'static str>,
    keys: BTreeSet<&'static str>,
    lookups: BTreeSet<&'static str>,
    inverse_lookups: BTreeSet<&'static str>,
    mandatory: BTreeSet<&'static str>,
}

impl ObjectTemplate {
    pub fn new(object_type: ObjectType, entries: Vec<AttributeTemplate>) -> Self {
        let collect = |keep: &dyn Fn(&AttributeTemplate) -> bool| {
            entries
                .iter()
                .filter(|entry| keep(entry))
                .map(|entry| entry.attribute)
                .collect::<BTreeSet<_>>()
        };
        let all = collect(&|_| true);
        let keys = collect(&|entry| entry.has_key(KeyRole::PrimaryKey));
        let lookups = collect(&|entry| {
            entry.has_key(KeyRole::PrimaryKey) || entry.has_key(KeyRole::LookupKey)
        });
        let inverse_lookups = collect(&|entry| entry.has_key(KeyRole::InverseKey));
        let mandatory = collect(&|entry| entry.requirement == Requirement::Mandatory);

        Self {
            object_type,
            entries,
            all,
            keys,
            lookups,
            inverse_lookups,
            mandatory,
        }
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    /// Entries in template order; the first is the class attribute.
    pub fn entries(&self) -> &[AttributeTemplate] {
        &self.entries
    }

    pub fn class_attribute(&self) -> Option<&AttributeTemplate> {
        self.entries.first()
    }

    pub fn entry(&self, attribute: &str) -> Option<&AttributeTemplate> {
        self.entries.iter().find(|entry| entry.attribute == attribute)
    }

    pub fn all_attributes(&self) -> &BTreeSet<&'static str> {
        &self.all
    }

    pub fn key_attributes(&self) -> &BTreeSet<&'static str> {
        &self.keys
    }

    pub fn lookup_attributes(&self) -> &BTreeSet<&'static str> {
        &self.lookups
    }

    pub fn inverse_lookup_attributes(&self) -> &BTreeSet<&'static str> {
        &self.inverse_lookups
    }

    pub fn mandatory_attributes(&self) -> &BTreeSet<&'static str> {
        &self.mandatory
    }

    /// Render the template the way `whois -t` prints it.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            entry.render_line(&mut out);
        }
        out
    }
}
