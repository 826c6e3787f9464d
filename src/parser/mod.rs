//! Grammar parsers for RPSL attribute values.
//!
//! These are the parsers behind the `Parser` syntaxes. Each one either
//! returns a typed value or a [`ParseError`]; the schema layer only looks at
//! success or failure. Parsers keep no state between calls.
//!
//! The grammars follow RFC 2622 (RPSL), RFC 2725 (hierarchical set names)
//! and RFC 4012 (multiprotocol extensions), within what the registry
//! accepts.

pub mod address;
pub mod autnum;
mod lexer;
pub mod misc;
pub mod names;
pub mod policy;

use nom::IResult;
use nom::combinator::all_consuming;

/// Failure to parse an attribute value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing to parse
    #[error("Empty value")]
    Empty,

    /// Input left over, or not understood, at the given position
    #[error("Unexpected input at '{0}'")]
    Unexpected(String),

    /// A token of the wrong kind
    #[error("Expected {expected}, found '{found}'")]
    Expected {
        expected: &'static str,
        found: String,
    },

    /// A numeric field outside its permitted range
    #[error("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: String },
}

impl ParseError {
    pub(crate) fn expected(expected: &'static str, found: impl Into<String>) -> Self {
        Self::Expected {
            expected,
            found: found.into(),
        }
    }

    pub(crate) fn out_of_range(what: &'static str, value: impl Into<String>) -> Self {
        Self::OutOfRange {
            what,
            value: value.into(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Address families a grammar may accept.
///
/// RPSL attributes without the `mp-` prefix only speak IPv4; their
/// multiprotocol counterparts accept IPv6 as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Ipv4,
    Multiprotocol,
}

impl Family {
    pub fn allows_ipv6(self) -> bool {
        matches!(self, Family::Multiprotocol)
    }
}

/// Run a nom parser over the whole (trimmed) input.
pub(crate) fn complete<'a, T, P>(input: &'a str, parser: P) -> ParseResult<T>
where
    P: FnMut(&'a str) -> IResult<&'a str, T>,
{
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    match all_consuming(parser)(input) {
        Ok((_, value)) => Ok(value),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(ParseError::Unexpected(e.input.to_string()))
        }
        Err(nom::Err::Incomplete(_)) => Err(ParseError::Unexpected(String::new())),
    }
}
