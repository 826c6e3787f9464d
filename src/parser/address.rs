//! IPv4/IPv6 addresses, prefixes, ranges and address-prefix-ranges.
//!
//! Address text is handed to `std::net` for the actual parsing, so octets
//! above 255 or malformed IPv6 groups are rejected exactly as the standard
//! library rejects them. Prefixes must have no host bits set.

use super::{Family, ParseError, ParseResult, complete};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit1, space0},
    combinator::{map, map_res, opt, value, verify},
    sequence::{preceded, separated_pair, tuple},
};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// An IPv4 prefix with no host bits set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Prefix {
    pub address: Ipv4Addr,
    pub length: u8,
}

impl Ipv4Prefix {
    /// Last address covered by the prefix.
    pub fn last(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.address) | !v4_mask(self.length))
    }
}

impl fmt::Display for Ipv4Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.length)
    }
}

/// An IPv6 prefix with no host bits set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv6Prefix {
    pub address: Ipv6Addr,
    pub length: u8,
}

impl fmt::Display for Ipv6Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpPrefix {
    V4(Ipv4Prefix),
    V6(Ipv6Prefix),
}

impl IpPrefix {
    pub fn length(&self) -> u8 {
        match self {
            IpPrefix::V4(prefix) => prefix.length,
            IpPrefix::V6(prefix) => prefix.length,
        }
    }

    /// Width of the address family in bits.
    pub fn max_length(&self) -> u8 {
        match self {
            IpPrefix::V4(_) => 32,
            IpPrefix::V6(_) => 128,
        }
    }
}

/// An inclusive IPv4 address range, as used by `inetnum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
}

impl fmt::Display for Ipv4Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// More-specifics operator trailing a prefix or set name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeOperator {
    /// `^-`: exclusive more specifics
    Exclusive,
    /// `^+`: inclusive more specifics
    Inclusive,
    /// `^n`: more specifics of length n
    Length(u8),
    /// `^n-m`: more specifics of length n through m
    Between(u8, u8),
}

impl RangeOperator {
    /// Check the operator against the prefix length it qualifies.
    ///
    /// `n` and `m` must lie between the prefix length and the family
    /// width, with `n <= m`.
    pub fn check(&self, length: u8, max: u8) -> ParseResult<()> {
        let ok = match *self {
            RangeOperator::Exclusive | RangeOperator::Inclusive => true,
            RangeOperator::Length(n) => n >= length && n <= max,
            RangeOperator::Between(n, m) => n >= length && n <= m && m <= max,
        };
        if ok {
            Ok(())
        } else {
            Err(ParseError::out_of_range("range operator", self.to_string()))
        }
    }
}

impl fmt::Display for RangeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeOperator::Exclusive => f.write_str("^-"),
            RangeOperator::Inclusive => f.write_str("^+"),
            RangeOperator::Length(n) => write!(f, "^{}", n),
            RangeOperator::Between(n, m) => write!(f, "^{}-{}", n, m),
        }
    }
}

/// A prefix optionally qualified with a [`RangeOperator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressPrefixRange {
    pub prefix: IpPrefix,
    pub operator: Option<RangeOperator>,
}

fn v4_mask(length: u8) -> u32 {
    if length == 0 { 0 } else { u32::MAX << (32 - u32::from(length)) }
}

fn v6_mask(length: u8) -> u128 {
    if length == 0 { 0 } else { u128::MAX << (128 - u32::from(length)) }
}

pub(crate) fn ipv4_address(input: &str) -> IResult<&str, Ipv4Addr> {
    map_res(
        take_while1(|c: char| c.is_ascii_digit() || c == '.'),
        str::parse::<Ipv4Addr>,
    )(input)
}

pub(crate) fn ipv6_address(input: &str) -> IResult<&str, Ipv6Addr> {
    map_res(
        take_while1(|c: char| c.is_ascii_hexdigit() || c == ':' || c == '.'),
        str::parse::<Ipv6Addr>,
    )(input)
}

fn prefix_length(max: u8) -> impl FnMut(&str) -> IResult<&str, u8> {
    move |input| verify(map_res(digit1, str::parse::<u8>), |length: &u8| *length <= max)(input)
}

pub(crate) fn ipv4_prefix(input: &str) -> IResult<&str, Ipv4Prefix> {
    map(
        verify(
            separated_pair(ipv4_address, char('/'), prefix_length(32)),
            |(address, length): &(Ipv4Addr, u8)| u32::from(*address) & !v4_mask(*length) == 0,
        ),
        |(address, length)| Ipv4Prefix { address, length },
    )(input)
}

pub(crate) fn ipv6_prefix(input: &str) -> IResult<&str, Ipv6Prefix> {
    map(
        verify(
            separated_pair(ipv6_address, char('/'), prefix_length(128)),
            |(address, length): &(Ipv6Addr, u8)| u128::from(*address) & !v6_mask(*length) == 0,
        ),
        |(address, length)| Ipv6Prefix { address, length },
    )(input)
}

pub(crate) fn ip_prefix(family: Family) -> impl FnMut(&str) -> IResult<&str, IpPrefix> {
    move |input| {
        if family.allows_ipv6() {
            alt((map(ipv4_prefix, IpPrefix::V4), map(ipv6_prefix, IpPrefix::V6)))(input)
        } else {
            map(ipv4_prefix, IpPrefix::V4)(input)
        }
    }
}

pub(crate) fn ip_address(family: Family) -> impl FnMut(&str) -> IResult<&str, IpAddr> {
    move |input| {
        if family.allows_ipv6() {
            alt((map(ipv4_address, IpAddr::V4), map(ipv6_address, IpAddr::V6)))(input)
        } else {
            map(ipv4_address, IpAddr::V4)(input)
        }
    }
}

fn small_number(input: &str) -> IResult<&str, u8> {
    map_res(digit1, str::parse::<u8>)(input)
}

pub(crate) fn range_operator(input: &str) -> IResult<&str, RangeOperator> {
    preceded(
        char('^'),
        alt((
            value(RangeOperator::Exclusive, char('-')),
            value(RangeOperator::Inclusive, char('+')),
            map(
                separated_pair(small_number, char('-'), small_number),
                |(n, m)| RangeOperator::Between(n, m),
            ),
            map(small_number, RangeOperator::Length),
        )),
    )(input)
}

pub(crate) fn address_prefix_range(
    family: Family,
) -> impl FnMut(&str) -> IResult<&str, AddressPrefixRange> {
    move |input| {
        verify(
            map(
                tuple((ip_prefix(family), opt(range_operator))),
                |(prefix, operator)| AddressPrefixRange { prefix, operator },
            ),
            |range: &AddressPrefixRange| match range.operator {
                Some(operator) => operator
                    .check(range.prefix.length(), range.prefix.max_length())
                    .is_ok(),
                None => true,
            },
        )(input)
    }
}

fn ipv4_range(input: &str) -> IResult<&str, Ipv4Range> {
    alt((
        map(
            verify(
                tuple((ipv4_address, space0, char('-'), space0, ipv4_address)),
                |(start, _, _, _, end): &(Ipv4Addr, &str, char, &str, Ipv4Addr)| start <= end,
            ),
            |(start, _, _, _, end)| Ipv4Range { start, end },
        ),
        map(ipv4_prefix, |prefix| Ipv4Range {
            start: prefix.address,
            end: prefix.last(),
        }),
        map(ipv4_address, |address| Ipv4Range {
            start: address,
            end: address,
        }),
    ))(input)
}

pub fn parse_ipv4_address(input: &str) -> ParseResult<Ipv4Addr> {
    complete(input, ipv4_address)
}

pub fn parse_ipv6_address(input: &str) -> ParseResult<Ipv6Addr> {
    complete(input, ipv6_address)
}

pub fn parse_ipv4_prefix(input: &str) -> ParseResult<Ipv4Prefix> {
    complete(input, ipv4_prefix)
}

pub fn parse_ipv6_prefix(input: &str) -> ParseResult<Ipv6Prefix> {
    complete(input, ipv6_prefix)
}

/// An `inetnum` key: `a.b.c.d - e.f.g.h`, a prefix, or a single address.
pub fn parse_ipv4_range(input: &str) -> ParseResult<Ipv4Range> {
    complete(input, ipv4_range)
}

/// A prefix or a bare host address, in the given family.
pub fn parse_address_or_prefix(input: &str, family: Family) -> ParseResult<IpPrefix> {
    complete(input, |i| {
        alt((
            ip_prefix(family),
            map(ip_address(family), |address| match address {
                IpAddr::V4(address) => IpPrefix::V4(Ipv4Prefix { address, length: 32 }),
                IpAddr::V6(address) => IpPrefix::V6(Ipv6Prefix {
                    address,
                    length: 128,
                }),
            }),
        ))(i)
    })
}

pub fn parse_address_prefix_range(input: &str, family: Family) -> ParseResult<AddressPrefixRange> {
    complete(input, address_prefix_range(family))
}

pub fn parse_range_operator(input: &str) -> ParseResult<RangeOperator> {
    complete(input, range_operator)
}
