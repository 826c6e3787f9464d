//! Registry object types and the in-memory object representation.
//!
//! An [`RpslObject`] is what the validator consumes: an object type plus the
//! ordered attribute lines exactly as submitted. Names are kept as written
//! (they may be flags or `*xx` aliases) and resolved by the catalog.
//!
//! # Examples
//!
//! ```rust
//! use rpsl_schema::object::{ObjectType, RpslObject};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let object = RpslObject::parse(
//!     "mntner: EXAMPLE-MNT\n\
//!      descr:  Example maintainer\n\
//!      source: TEST\n",
//! )?;
//! assert_eq!(object.object_type(), ObjectType::Mntner);
//! assert_eq!(object.key(), "EXAMPLE-MNT");
//! # Ok(())
//! # }
//! ```

use crate::error::{ObjectParseError, ObjectParseResult, UnknownObjectType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of registry object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectType {
    AsBlock,
    AsSet,
    AutNum,
    Domain,
    FilterSet,
    Inet6num,
    InetRtr,
    Inetnum,
    Irt,
    KeyCert,
    Mntner,
    Organisation,
    PeeringSet,
    Person,
    Poem,
    PoeticForm,
    Role,
    Route,
    Route6,
    RouteSet,
    RtrSet,
}

impl ObjectType {
    /// Every object type, in declaration order.
    pub const ALL: [ObjectType; 21] = [
        ObjectType::AsBlock,
        ObjectType::AsSet,
        ObjectType::AutNum,
        ObjectType::Domain,
        ObjectType::FilterSet,
        ObjectType::Inet6num,
        ObjectType::InetRtr,
        ObjectType::Inetnum,
        ObjectType::Irt,
        ObjectType::KeyCert,
        ObjectType::Mntner,
        ObjectType::Organisation,
        ObjectType::PeeringSet,
        ObjectType::Person,
        ObjectType::Poem,
        ObjectType::PoeticForm,
        ObjectType::Role,
        ObjectType::Route,
        ObjectType::Route6,
        ObjectType::RouteSet,
        ObjectType::RtrSet,
    ];

    /// Canonical RPSL name, which is also the name of the class attribute.
    pub fn name(self) -> &'static str {
        match self {
            ObjectType::AsBlock => "as-block",
            ObjectType::AsSet => "as-set",
            ObjectType::AutNum => "aut-num",
            ObjectType::Domain => "domain",
            ObjectType::FilterSet => "filter-set",
            ObjectType::Inet6num => "inet6num",
            ObjectType::InetRtr => "inet-rtr",
            ObjectType::Inetnum => "inetnum",
            ObjectType::Irt => "irt",
            ObjectType::KeyCert => "key-cert",
            ObjectType::Mntner => "mntner",
            ObjectType::Organisation => "organisation",
            ObjectType::PeeringSet => "peering-set",
            ObjectType::Person => "person",
            ObjectType::Poem => "poem",
            ObjectType::PoeticForm => "poetic-form",
            ObjectType::Role => "role",
            ObjectType::Route => "route",
            ObjectType::Route6 => "route6",
            ObjectType::RouteSet => "route-set",
            ObjectType::RtrSet => "rtr-set",
        }
    }

    /// Position in [`ObjectType::ALL`], used for dense per-type tables.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Set objects whose names carry a fixed prefix (`AS-`, `RS-`, ...).
    pub fn is_set(self) -> bool {
        matches!(
            self,
            ObjectType::AsSet
                | ObjectType::FilterSet
                | ObjectType::PeeringSet
                | ObjectType::RouteSet
                | ObjectType::RtrSet
        )
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ObjectType {
    type Err = UnknownObjectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ObjectType::ALL
            .iter()
            .copied()
            .find(|object_type| object_type.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownObjectType(s.to_string()))
    }
}

/// One attribute line of an object, as submitted.
///
/// `value` holds the raw text including comments; continuation lines are
/// kept separated by `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpslAttribute {
    pub name: String,
    pub value: String,
}

impl RpslAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Lowercased attribute name, the form used for catalog lookups.
    pub fn key(&self) -> String {
        self.name.trim().to_ascii_lowercase()
    }

    /// The value with `#` comments stripped and whitespace collapsed.
    ///
    /// This is the text that syntax matchers see.
    pub fn clean_value(&self) -> String {
        let mut cleaned = String::with_capacity(self.value.len());
        for line in self.value.lines() {
            let content = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            };
            for word in content.split_whitespace() {
                if !cleaned.is_empty() {
                    cleaned.push(' ');
                }
                cleaned.push_str(word);
            }
        }
        cleaned
    }
}

impl fmt::Display for RpslAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.value.lines();
        let first = lines.next().unwrap_or_default().trim();
        write!(f, "{:<16}{}", format!("{}:", self.name), first)?;
        for line in lines {
            write!(f, "\n+               {}", line.trim())?;
        }
        Ok(())
    }
}

/// A registry object: its type plus ordered attribute lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpslObject {
    object_type: ObjectType,
    attributes: Vec<RpslAttribute>,
}

impl RpslObject {
    /// Create an object from already separated attribute lines.
    pub fn new(object_type: ObjectType, attributes: Vec<RpslAttribute>) -> Self {
        Self {
            object_type,
            attributes,
        }
    }

    /// Create an object from `(name, value)` pairs.
    pub fn from_pairs<N, V, I>(object_type: ObjectType, pairs: I) -> Self
    where
        N: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (N, V)>,
    {
        Self::new(
            object_type,
            pairs
                .into_iter()
                .map(|(name, value)| RpslAttribute::new(name, value))
                .collect(),
        )
    }

    /// Read one object from RPSL text.
    ///
    /// The first attribute names the object type. Lines beginning with a
    /// space, tab or `+` continue the previous attribute; lines beginning
    /// with `%` or `#` are skipped.
    pub fn parse(text: &str) -> ObjectParseResult<Self> {
        let mut attributes: Vec<RpslAttribute> = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            if line.starts_with('%') || line.starts_with('#') {
                continue;
            }
            if line.trim().is_empty() {
                if attributes.is_empty() {
                    continue;
                }
                break;
            }

            if let Some(rest) = continuation(line) {
                let last = attributes
                    .last_mut()
                    .ok_or(ObjectParseError::DanglingContinuation { line: line_no })?;
                last.value.push('\n');
                last.value.push_str(rest.trim());
                continue;
            }

            let (name, value) =
                line.split_once(':')
                    .ok_or_else(|| ObjectParseError::MalformedLine {
                        line: line_no,
                        content: line.to_string(),
                    })?;
            if name.trim().is_empty() || name.contains(char::is_whitespace) {
                return Err(ObjectParseError::MalformedLine {
                    line: line_no,
                    content: line.to_string(),
                });
            }
            attributes.push(RpslAttribute::new(name.trim(), value.trim()));
        }

        let first = attributes.first().ok_or(ObjectParseError::Empty)?;
        let object_type = first.key().parse::<ObjectType>()?;
        Ok(Self::new(object_type, attributes))
    }

    /// Read every blank-line separated object in `text`.
    pub fn parse_all(text: &str) -> Vec<ObjectParseResult<Self>> {
        let mut objects = Vec::new();
        let mut paragraph = String::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                if !paragraph.trim().is_empty() {
                    objects.push(Self::parse(&paragraph));
                }
                paragraph.clear();
            } else {
                paragraph.push_str(line);
                paragraph.push('\n');
            }
        }
        if !paragraph.trim().is_empty() {
            objects.push(Self::parse(&paragraph));
        }
        objects
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn attributes(&self) -> &[RpslAttribute] {
        &self.attributes
    }

    /// Clean value of the class attribute, or empty for an empty object.
    pub fn key(&self) -> String {
        self.attributes
            .first()
            .map(RpslAttribute::clean_value)
            .unwrap_or_default()
    }

    /// Attribute lines whose name matches `name` case-insensitively.
    pub fn find_attributes<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RpslAttribute> {
        self.attributes
            .iter()
            .filter(move |attribute| attribute.name.trim().eq_ignore_ascii_case(name))
    }

    pub fn push(&mut self, attribute: RpslAttribute) {
        self.attributes.push(attribute);
    }

    /// Remove every line named `name`, returning how many were removed.
    pub fn remove_all(&mut self, name: &str) -> usize {
        let before = self.attributes.len();
        self.attributes
            .retain(|attribute| !attribute.name.trim().eq_ignore_ascii_case(name));
        before - self.attributes.len()
    }
}

impl fmt::Display for RpslObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attribute in &self.attributes {
            writeln!(f, "{}", attribute)?;
        }
        Ok(())
    }
}

fn continuation(line: &str) -> Option<&str> {
    if line.starts_with(' ') || line.starts_with('\t') {
        Some(line)
    } else {
        line.strip_prefix('+')
    }
}
