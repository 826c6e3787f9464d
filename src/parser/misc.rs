//! Small structured values: e-mail addresses, `changed` lines, timestamps,
//! DNS-related attributes, geolocation and assignment sizes.

use super::address::{ipv4_address, ipv6_address};
use super::names::is_domain_name;
use super::{ParseError, ParseResult, complete};
use chrono::{DateTime, FixedOffset, NaiveDate};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, space1},
    combinator::{map, opt, recognize, verify},
    sequence::{pair, preceded, separated_pair},
};
use std::net::IpAddr;

const MAX_EMAIL_LENGTH: usize = 80;

fn is_local_part_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~.-".contains(c)
}

fn email_address(input: &str) -> IResult<&str, &str> {
    verify(
        recognize(separated_pair(
            take_while1(is_local_part_char),
            char('@'),
            verify(
                take_while1(|c: char| c.is_ascii_alphanumeric() || c == '.' || c == '-'),
                |domain: &str| is_domain_name(domain) && domain.contains('.'),
            ),
        )),
        |address: &str| {
            address.len() <= MAX_EMAIL_LENGTH && !address.starts_with('.') && !address.contains("..")
        },
    )(input)
}

/// An e-mail address: `local@domain`, the domain having at least two labels.
pub fn parse_email(input: &str) -> ParseResult<()> {
    complete(input, map(email_address, |_| ()))
}

/// A `changed` line: an e-mail address optionally followed by a
/// `YYYYMMDD` date.
pub fn parse_changed(input: &str) -> ParseResult<Option<NaiveDate>> {
    let date = complete(
        input,
        map(
            pair(
                email_address,
                opt(preceded(space1, take_while1(|c: char| c.is_ascii_digit()))),
            ),
            |(_, date)| date,
        ),
    )?;
    match date {
        None => Ok(None),
        Some(date) if date.len() == 8 => NaiveDate::parse_from_str(date, "%Y%m%d")
            .map(Some)
            .map_err(|_| ParseError::out_of_range("date", date)),
        Some(date) => Err(ParseError::expected("YYYYMMDD", date)),
    }
}

/// A generated timestamp such as `2024-01-31T09:00:00Z`.
pub fn parse_timestamp(input: &str) -> ParseResult<DateTime<FixedOffset>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    DateTime::<FixedOffset>::parse_from_rfc3339(input)
        .map_err(|_| ParseError::expected("RFC 3339 timestamp", input))
}

/// A DS record: key tag, algorithm, digest type and a hex digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsRdata {
    pub key_tag: u16,
    pub algorithm: u8,
    pub digest_type: u8,
    pub digest: String,
}

pub fn parse_ds_rdata(input: &str) -> ParseResult<DsRdata> {
    let mut fields = input.split_whitespace();
    let mut number = |what: &'static str| -> ParseResult<u32> {
        let field = fields.next().ok_or(ParseError::expected(what, "end of value"))?;
        field
            .parse::<u32>()
            .map_err(|_| ParseError::expected(what, field))
    };
    let key_tag = number("key tag")?;
    let algorithm = number("algorithm")?;
    let digest_type = number("digest type")?;
    let key_tag =
        u16::try_from(key_tag).map_err(|_| ParseError::out_of_range("key tag", key_tag.to_string()))?;
    let algorithm = u8::try_from(algorithm)
        .map_err(|_| ParseError::out_of_range("algorithm", algorithm.to_string()))?;
    let digest_type = u8::try_from(digest_type)
        .map_err(|_| ParseError::out_of_range("digest type", digest_type.to_string()))?;

    let digest: String = fields
        .flat_map(|part| part.chars())
        .filter(|c| *c != '(' && *c != ')')
        .collect();
    if digest.is_empty() || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseError::expected("hex digest", digest));
    }
    Ok(DsRdata {
        key_tag,
        algorithm,
        digest_type,
        digest,
    })
}

/// An `nserver` value: a host name with an optional glue address.
pub fn parse_nserver(input: &str) -> ParseResult<(String, Option<IpAddr>)> {
    let mut fields = input.split_whitespace();
    let host = fields.next().ok_or(ParseError::Empty)?;
    if !is_domain_name(host) {
        return Err(ParseError::expected("host name", host));
    }
    let glue = fields
        .next()
        .map(|address| {
            complete(
                address,
                alt((map(ipv4_address, IpAddr::V4), map(ipv6_address, IpAddr::V6))),
            )
        })
        .transpose()?;
    match fields.next() {
        Some(extra) => Err(ParseError::Unexpected(extra.to_string())),
        None => Ok((host.to_string(), glue)),
    }
}

fn is_octet_label(label: &str) -> bool {
    let octet = |part: &str| {
        !part.is_empty()
            && part.chars().all(|c| c.is_ascii_digit())
            && (part == "0" || !part.starts_with('0'))
            && part.parse::<u8>().is_ok()
    };
    match label.split_once('-') {
        Some((low, high)) => {
            octet(low) && octet(high) && low.parse::<u8>().ok() < high.parse::<u8>().ok()
        }
        None => octet(label),
    }
}

/// A reverse-delegation zone: `in-addr.arpa`, `ip6.arpa` or `e164.arpa`.
///
/// IPv4 zones may carry a range (`0-127.2.0.192.in-addr.arpa`) in their
/// leading label only.
pub fn parse_reverse_domain(input: &str) -> ParseResult<()> {
    let domain = input.trim().trim_end_matches('.').to_ascii_lowercase();
    if domain.is_empty() {
        return Err(ParseError::Empty);
    }
    if !is_domain_name(&domain) {
        return Err(ParseError::expected("domain name", domain));
    }
    let ok = if let Some(labels) = domain.strip_suffix(".in-addr.arpa") {
        let labels: Vec<&str> = labels.split('.').collect();
        labels.len() <= 4
            && labels.iter().enumerate().all(|(i, label)| {
                if i == 0 {
                    is_octet_label(label)
                } else {
                    !label.contains('-') && is_octet_label(label)
                }
            })
    } else if let Some(labels) = domain.strip_suffix(".ip6.arpa") {
        labels.split('.').count() <= 32
            && labels
                .split('.')
                .all(|label| label.len() == 1 && label.chars().all(|c| c.is_ascii_hexdigit()))
    } else if let Some(labels) = domain.strip_suffix(".e164.arpa") {
        labels
            .split('.')
            .all(|label| label.len() == 1 && label.chars().all(|c| c.is_ascii_digit()))
    } else {
        false
    };
    if ok {
        Ok(())
    } else {
        Err(ParseError::expected("reverse zone", domain))
    }
}

/// A `geoloc` value: decimal latitude then longitude.
pub fn parse_geoloc(input: &str) -> ParseResult<(f64, f64)> {
    let mut fields = input.split_whitespace();
    let mut coordinate = |what: &'static str, limit: f64| -> ParseResult<f64> {
        let field = fields.next().ok_or(ParseError::expected(what, "end of value"))?;
        let valid_text = field
            .strip_prefix('-')
            .unwrap_or(field)
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.');
        let value = field
            .parse::<f64>()
            .ok()
            .filter(|_| valid_text)
            .ok_or_else(|| ParseError::expected(what, field))?;
        if value.abs() <= limit {
            Ok(value)
        } else {
            Err(ParseError::out_of_range(what, field))
        }
    };
    let latitude = coordinate("latitude", 90.0)?;
    let longitude = coordinate("longitude", 180.0)?;
    match fields.next() {
        Some(extra) => Err(ParseError::Unexpected(extra.to_string())),
        None => Ok((latitude, longitude)),
    }
}

/// An IPv6 `assignment-size`: a prefix length between 1 and 128.
pub fn parse_assignment_size(input: &str) -> ParseResult<u8> {
    let input = input.trim();
    match input.parse::<u8>() {
        Ok(size) if (1..=128).contains(&size) && !input.starts_with('0') => Ok(size),
        Ok(_) => Err(ParseError::out_of_range("assignment size", input)),
        Err(_) if input.is_empty() => Err(ParseError::Empty),
        Err(_) => Err(ParseError::expected("prefix length", input)),
    }
}
