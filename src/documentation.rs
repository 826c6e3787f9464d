//! Attribute documentation, optionally varying by object type.

use crate::object::ObjectType;

/// Human-readable description of an attribute.
///
/// Some attributes mean different things on different objects (`status`
/// on `inetnum` versus `aut-num`, `members` on each set type). Those carry
/// one text per object type; object types without an entry describe as the
/// empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Documentation {
    Single(&'static str),
    PerObjectType(&'static [(ObjectType, &'static str)]),
}

impl Documentation {
    pub fn describe(&self, object_type: ObjectType) -> &'static str {
        match self {
            Documentation::Single(text) => text,
            Documentation::PerObjectType(entries) => entries
                .iter()
                .find(|(candidate, _)| *candidate == object_type)
                .map(|(_, text)| *text)
                .unwrap_or(""),
        }
    }
}
