//! Set names, router names and maintainer-style identifiers.
//!
//! Set names may be hierarchical (RFC 2725): colon-separated components,
//! each either an AS number or a name carrying the set's prefix, with at
//! least one component of the latter kind.

use super::autnum::is_as_number;
use super::{ParseError, ParseResult};

/// The set object kinds and their name prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKind {
    AsSet,
    RouteSet,
    RtrSet,
    FilterSet,
    PeeringSet,
}

impl SetKind {
    pub fn prefix(self) -> &'static str {
        match self {
            SetKind::AsSet => "AS-",
            SetKind::RouteSet => "RS-",
            SetKind::RtrSet => "RTRS-",
            SetKind::FilterSet => "FLTR-",
            SetKind::PeeringSet => "PRNG-",
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn is_set_component(kind: SetKind, component: &str) -> bool {
    let prefix = kind.prefix();
    if component.len() <= prefix.len() || !component.is_char_boundary(prefix.len()) {
        return false;
    }
    let (head, tail) = component.split_at(prefix.len());
    head.eq_ignore_ascii_case(prefix)
        && tail.chars().all(is_name_char)
        && tail.chars().last().is_some_and(|c| c.is_ascii_alphanumeric())
}

/// Whether `name` is a (possibly hierarchical) set name of `kind`.
pub fn is_set_name(kind: SetKind, name: &str) -> bool {
    if name.is_empty() || name.len() > 80 {
        return false;
    }
    let mut has_set_component = false;
    for component in name.split(':') {
        if is_set_component(kind, component) {
            has_set_component = true;
        } else if !is_as_number(component) {
            return false;
        }
    }
    has_set_component
}

pub fn parse_set_name(kind: SetKind, input: &str) -> ParseResult<()> {
    let name = input.trim();
    if name.is_empty() {
        Err(ParseError::Empty)
    } else if is_set_name(kind, name) {
        Ok(())
    } else {
        Err(ParseError::expected(kind.prefix(), name))
    }
}

/// A fully qualified domain name: dot-separated labels of letters, digits
/// and hyphens, with an optional trailing dot.
pub fn is_domain_name(name: &str) -> bool {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() || name.len() > 254 {
        return false;
    }
    name.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

/// An `inet-rtr` name: a domain name with at least two labels.
pub fn is_router_name(name: &str) -> bool {
    is_domain_name(name) && name.trim_end_matches('.').contains('.')
}

/// A maintainer name: starts with a letter, ends with a letter or digit.
pub fn is_mntner_name(name: &str) -> bool {
    name.len() <= 80
        && name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && name.chars().last().is_some_and(|c| c.is_ascii_alphanumeric())
        && name.chars().all(is_name_char)
}
