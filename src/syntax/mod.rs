//! Value syntaxes for RPSL attributes.
//!
//! A [`Syntax`] is a predicate over `(object type, value)` with a
//! human-readable description. Syntaxes are `static` values, shared by
//! every catalog that uses them:
//!
//! - [`patterns`] - regular-expression syntaxes for names, handles and
//!   other lexically simple values
//! - [`grammars`] - syntaxes backed by the parsers in [`crate::parser`]
//! - [`contextual`] - syntaxes whose meaning depends on the object type

pub mod contextual;
pub mod grammars;
pub mod patterns;

use crate::object::ObjectType;
use crate::parser::ParseResult;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub use contextual::{ContextualSyntax, StatusVocabulary};

/// How an attribute value is checked.
#[derive(Debug)]
pub enum Syntax {
    /// Any value, including free text
    Any,
    /// A compiled pattern with an optional length limit
    Pattern(PatternSyntax),
    /// A grammar parser; any parse error means no match
    Parser(ParserSyntax),
    /// Dispatch on the object type the value appears in
    Contextual(ContextualSyntax),
}

impl Syntax {
    pub fn matches(&self, object_type: ObjectType, value: &str) -> bool {
        match self {
            Syntax::Any => true,
            Syntax::Pattern(pattern) => pattern.matches(value),
            Syntax::Parser(parser) => parser.matches(value),
            Syntax::Contextual(contextual) => contextual.matches(object_type, value),
        }
    }

    pub fn describe(&self, object_type: ObjectType) -> String {
        match self {
            Syntax::Any => "Free-form text.".to_string(),
            Syntax::Pattern(pattern) => pattern.description.to_string(),
            Syntax::Parser(parser) => parser.description.to_string(),
            Syntax::Contextual(contextual) => contextual.describe(object_type),
        }
    }
}

#[derive(Debug)]
pub struct PatternSyntax {
    pub regex: &'static LazyLock<Regex>,
    pub max_length: Option<usize>,
    pub description: &'static str,
}

impl PatternSyntax {
    pub fn matches(&self, value: &str) -> bool {
        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return false;
            }
        }
        self.regex.is_match(value)
    }
}

pub struct ParserSyntax {
    pub parse: fn(&str) -> ParseResult<()>,
    pub description: &'static str,
}

impl ParserSyntax {
    pub fn matches(&self, value: &str) -> bool {
        (self.parse)(value).is_ok()
    }
}

impl fmt::Debug for ParserSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserSyntax")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
