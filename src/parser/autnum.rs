//! AS numbers and AS blocks.
//!
//! AS numbers are 32-bit: `AS0` through `AS4294967295`. Leading zeros are
//! not accepted.

use super::{ParseResult, complete};
use nom::{
    IResult,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1, space0},
    combinator::{map, map_res, verify},
    sequence::{preceded, tuple},
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AsNumber(pub u32);

impl fmt::Display for AsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AS{}", self.0)
    }
}

/// An inclusive range of AS numbers, the key of an `as-block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AsBlock {
    pub start: AsNumber,
    pub end: AsNumber,
}

impl AsBlock {
    pub fn contains(&self, number: AsNumber) -> bool {
        self.start <= number && number <= self.end
    }
}

fn canonical_digits(digits: &str) -> bool {
    digits == "0" || !digits.starts_with('0')
}

pub(crate) fn as_number(input: &str) -> IResult<&str, AsNumber> {
    map(
        map_res(
            preceded(
                tag_no_case("AS"),
                verify(digit1, |digits: &str| canonical_digits(digits)),
            ),
            str::parse::<u32>,
        ),
        AsNumber,
    )(input)
}

fn as_block(input: &str) -> IResult<&str, AsBlock> {
    map(
        verify(
            tuple((as_number, space0, char('-'), space0, as_number)),
            |(start, _, _, _, end): &(AsNumber, &str, char, &str, AsNumber)| start <= end,
        ),
        |(start, _, _, _, end)| AsBlock { start, end },
    )(input)
}

pub fn parse_as_number(input: &str) -> ParseResult<AsNumber> {
    complete(input, as_number)
}

pub fn parse_as_block(input: &str) -> ParseResult<AsBlock> {
    complete(input, as_block)
}

pub(crate) fn is_as_number(word: &str) -> bool {
    parse_as_number(word).is_ok()
}
