//! Routing policy expressions (RFC 2622 section 5/6, RFC 4012).
//!
//! Covers `import`/`export`/`default` and their `mp-` variants, filters,
//! peerings, route aggregation (`components`, `export-comps`, `inject`,
//! `aggr-mtd`), router attributes (`ifaddr`, `interface`, `peer`) and
//! `mnt-routes`. Values are tokenized first and then walked by a
//! recursive-descent parser; nothing is evaluated.

use super::address::{
    IpPrefix, RangeOperator, parse_address_or_prefix, parse_address_prefix_range, parse_ipv4_address,
    parse_ipv6_address, parse_range_operator,
};
use super::autnum::is_as_number;
use super::lexer::{Cursor, Token, tokenize};
use super::names::{SetKind, is_mntner_name, is_router_name, is_set_name};
use super::{Family, ParseError, ParseResult};

/// Words that end an expression and can never be names.
const KEYWORDS: &[&str] = &[
    "accept", "action", "afi", "and", "announce", "at", "atomic", "except", "from", "into",
    "masklen", "networks", "not", "or", "protocol", "refine", "to", "tunnel", "upon",
];

/// Route attributes an action may set or modify.
const ACTION_ATTRIBUTES: &[&str] = &[
    "pref", "med", "dpa", "aspath", "community", "next-hop", "cost",
];

/// Longest first, so `<<=` is never read as `<`.
const ACTION_OPERATORS: &[&str] = &["<<=", ">>=", ".=", "+=", "-=", "*=", "/=", "="];

const WELL_KNOWN_COMMUNITIES: &[&str] = &[
    "INTERNET", "NO_EXPORT", "NO_ADVERTISE", "NO_EXPORT_SUBCONFED",
];

const AFI_NAMES: &[&str] = &[
    "ipv4",
    "ipv6",
    "any",
    "ipv4.unicast",
    "ipv4.multicast",
    "ipv6.unicast",
    "ipv6.multicast",
    "any.unicast",
    "any.multicast",
];

const PEER_PROTOCOLS: &[&str] = &[
    "BGP4", "MPBGP", "OSPF", "RIP", "RIPng", "IGRP", "IS-IS", "STATIC", "DVMRP", "PIM-DM",
    "PIM-SM", "CBT", "MOSPF",
];

fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|keyword| keyword.eq_ignore_ascii_case(word))
}

/// Which side of a policy is being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Import,
    Export,
}

impl Direction {
    fn peer_keyword(self) -> &'static str {
        match self {
            Direction::Import => "from",
            Direction::Export => "to",
        }
    }

    fn filter_keyword(self) -> &'static str {
        match self {
            Direction::Import => "accept",
            Direction::Export => "announce",
        }
    }
}

struct PolicyParser<'t, 'a> {
    cursor: Cursor<'t, 'a>,
    family: Family,
}

impl<'t, 'a> PolicyParser<'t, 'a> {
    fn new(tokens: &'t [Token<'a>], family: Family) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            family,
        }
    }

    fn finish(&mut self) -> ParseResult<()> {
        self.cursor.eat_punct(';');
        self.cursor.expect_end()
    }

    // AS expressions

    fn as_expression(&mut self) -> ParseResult<()> {
        self.as_term()?;
        while self.cursor.eat_any_keyword(&["and", "or", "except"]) {
            self.as_term()?;
        }
        Ok(())
    }

    fn as_term(&mut self) -> ParseResult<()> {
        if self.cursor.eat_punct('(') {
            self.as_expression()?;
            return self.cursor.expect_punct(')');
        }
        let word = self.cursor.expect_word("AS number or as-set")?;
        if is_as_number(word) || is_set_name(SetKind::AsSet, word) {
            Ok(())
        } else {
            Err(ParseError::expected("AS number or as-set", word))
        }
    }

    // Router expressions

    fn is_router_term(&self, word: &str) -> bool {
        !is_keyword(word)
            && (parse_address_or_prefix(word, self.family).is_ok()
                || is_set_name(SetKind::RtrSet, word)
                || is_router_name(word))
    }

    fn starts_router_expression(&self) -> bool {
        match self.cursor.peek() {
            Some(Token::Punct('(')) => true,
            Some(Token::Word(word)) => self.is_router_term(word),
            _ => false,
        }
    }

    fn router_expression(&mut self) -> ParseResult<()> {
        self.router_term()?;
        while self.cursor.eat_any_keyword(&["and", "or", "except"]) {
            self.router_term()?;
        }
        Ok(())
    }

    fn router_term(&mut self) -> ParseResult<()> {
        if self.cursor.eat_punct('(') {
            self.router_expression()?;
            return self.cursor.expect_punct(')');
        }
        let word = self.cursor.expect_word("router expression")?;
        if self.is_router_term(word) && !word.contains('/') {
            Ok(())
        } else {
            Err(ParseError::expected("router expression", word))
        }
    }

    // Peerings

    fn peering(&mut self) -> ParseResult<()> {
        if let Some(word) = self.cursor.peek_word() {
            if is_set_name(SetKind::PeeringSet, word) {
                self.cursor.next();
                return Ok(());
            }
        }
        self.as_expression()?;
        if self.starts_router_expression() {
            self.router_expression()?;
        }
        if self.cursor.eat_keyword("at") {
            self.router_expression()?;
        }
        Ok(())
    }

    // Actions

    /// One or more `<attribute> <op> <value>` or `<attribute>.<method>(...)`
    /// items, each closed by `;`. The last `;` may be left off at the end of
    /// the value.
    fn action(&mut self) -> ParseResult<()> {
        loop {
            self.action_item()?;
            if !self.cursor.eat_punct(';') && !self.cursor.at_end() {
                return Err(ParseError::expected(";", self.cursor.describe_next()));
            }
            let more = self
                .cursor
                .peek_word()
                .is_some_and(|word| split_action_attribute(word).is_some());
            if !more {
                return Ok(());
            }
        }
    }

    fn action_item(&mut self) -> ParseResult<()> {
        let word = self.cursor.expect_word("action attribute")?;
        let Some((attribute, rest)) = split_action_attribute(word) else {
            return Err(ParseError::expected("action attribute", word));
        };
        if let Some(method) = rest.strip_prefix('.').filter(|method| !method.starts_with('=')) {
            if !is_identifier(method) {
                return Err(ParseError::expected("method name", word));
            }
            return self.cursor.skip_group();
        }
        let rest = if rest.is_empty() {
            self.cursor.expect_word("action operator")?
        } else {
            rest
        };
        let Some(operator) = ACTION_OPERATORS.iter().find(|op| rest.starts_with(**op)) else {
            return Err(ParseError::expected("action operator", rest));
        };
        let inline = &rest[operator.len()..];
        if !inline.is_empty() {
            return check_action_value(attribute, inline, self.family);
        }
        if attribute == "community" && self.cursor.eat_punct('{') {
            return self.community_list();
        }
        let value = self.cursor.expect_word("action value")?;
        check_action_value(attribute, value, self.family)
    }

    fn community_list(&mut self) -> ParseResult<()> {
        if self.cursor.eat_punct('}') {
            return Ok(());
        }
        loop {
            let value = self.cursor.expect_word("community")?;
            check_community(value)?;
            if self.cursor.eat_punct('}') {
                return Ok(());
            }
            self.cursor.expect_punct(',')?;
        }
    }

    // Filters

    fn filter(&mut self) -> ParseResult<()> {
        self.filter_and()?;
        loop {
            if self.cursor.eat_keyword("or") || self.starts_filter_term() {
                self.filter_and()?;
            } else {
                return Ok(());
            }
        }
    }

    fn filter_and(&mut self) -> ParseResult<()> {
        self.filter_not()?;
        while self.cursor.eat_keyword("and") {
            self.filter_not()?;
        }
        Ok(())
    }

    fn filter_not(&mut self) -> ParseResult<()> {
        if self.cursor.eat_keyword("not") {
            return self.filter_not();
        }
        self.filter_atom()
    }

    fn starts_filter_term(&self) -> bool {
        match self.cursor.peek() {
            Some(Token::Punct('(')) | Some(Token::Punct('{')) | Some(Token::AsPath(_)) => true,
            Some(Token::Word(word)) => word.eq_ignore_ascii_case("not") || !is_keyword(word),
            _ => false,
        }
    }

    fn filter_atom(&mut self) -> ParseResult<()> {
        match self.cursor.next() {
            Some(Token::Punct('(')) => {
                self.filter()?;
                self.cursor.expect_punct(')')
            }
            Some(Token::Punct('{')) => {
                self.prefix_set()?;
                if let Some(word) = self.cursor.peek_word() {
                    if word.starts_with('^') {
                        parse_range_operator(word)?;
                        self.cursor.next();
                    }
                }
                Ok(())
            }
            Some(Token::AsPath(_)) => Ok(()),
            Some(Token::Word(word)) => self.filter_word(word),
            Some(Token::Punct(punct)) => Err(ParseError::expected("filter", punct.to_string())),
            None => Err(ParseError::expected("filter", "end of value")),
        }
    }

    fn filter_word(&mut self, word: &str) -> ParseResult<()> {
        if word.eq_ignore_ascii_case("ANY") || word.eq_ignore_ascii_case("PeerAS") {
            return Ok(());
        }
        let (base, operator) = match word.find('^') {
            Some(pos) => (&word[..pos], Some(&word[pos..])),
            None => (word, None),
        };
        if is_as_number(base)
            || is_set_name(SetKind::AsSet, base)
            || is_set_name(SetKind::RouteSet, base)
        {
            if let Some(operator) = operator {
                parse_range_operator(operator)?;
            }
            return Ok(());
        }
        if operator.is_none() && is_set_name(SetKind::FilterSet, base) {
            return Ok(());
        }
        if is_attribute_method(word) && self.cursor.peek() == Some(Token::Punct('(')) {
            return self.cursor.skip_group();
        }
        Err(ParseError::expected("filter term", word))
    }

    fn prefix_set(&mut self) -> ParseResult<()> {
        if self.cursor.eat_punct('}') {
            return Ok(());
        }
        loop {
            let entry = self.cursor.expect_word("address prefix range")?;
            parse_address_prefix_range(entry, self.family)?;
            if self.cursor.eat_punct('}') {
                return Ok(());
            }
            self.cursor.expect_punct(',')?;
        }
    }

    // Policies

    fn protocol_into(&mut self) -> ParseResult<()> {
        if self.cursor.eat_keyword("protocol") {
            self.cursor.expect_word("protocol name")?;
        }
        if self.cursor.eat_keyword("into") {
            self.cursor.expect_word("protocol name")?;
        }
        Ok(())
    }

    fn afi_list(&mut self) -> ParseResult<()> {
        loop {
            let afi = self.cursor.expect_word("afi")?;
            if !AFI_NAMES.iter().any(|name| name.eq_ignore_ascii_case(afi)) {
                return Err(ParseError::expected("afi", afi));
            }
            if !self.cursor.eat_punct(',') {
                return Ok(());
            }
        }
    }

    fn optional_afi(&mut self) -> ParseResult<()> {
        if self.family.allows_ipv6() && self.cursor.eat_keyword("afi") {
            self.afi_list()?;
        }
        Ok(())
    }

    fn policy(&mut self, direction: Direction) -> ParseResult<()> {
        self.protocol_into()?;
        self.optional_afi()?;
        self.policy_expression(direction)?;
        self.finish()
    }

    fn policy_expression(&mut self, direction: Direction) -> ParseResult<()> {
        self.policy_term(direction)?;
        if self.cursor.eat_any_keyword(&["refine", "except"]) {
            self.optional_afi()?;
            self.policy_expression(direction)?;
        }
        Ok(())
    }

    fn policy_term(&mut self, direction: Direction) -> ParseResult<()> {
        if !self.cursor.eat_punct('{') {
            return self.policy_factor(direction);
        }
        let mut factors = 0;
        while !self.cursor.eat_punct('}') {
            self.policy_factor(direction)?;
            self.cursor.eat_punct(';');
            factors += 1;
        }
        if factors == 0 {
            Err(ParseError::expected("policy factor", "}"))
        } else {
            Ok(())
        }
    }

    fn policy_factor(&mut self, direction: Direction) -> ParseResult<()> {
        let mut peerings = 0;
        while self.cursor.eat_keyword(direction.peer_keyword()) {
            self.peering()?;
            if self.cursor.eat_keyword("action") {
                self.action()?;
            }
            peerings += 1;
        }
        if peerings == 0 {
            return Err(ParseError::expected(
                direction.peer_keyword(),
                self.cursor.describe_next(),
            ));
        }
        self.cursor.expect_keyword(direction.filter_keyword())?;
        self.filter()
    }

    fn via_policy(&mut self, direction: Direction) -> ParseResult<()> {
        self.protocol_into()?;
        self.optional_afi()?;
        self.peering()?;
        self.policy_expression(direction)?;
        self.finish()
    }

    fn default(&mut self) -> ParseResult<()> {
        self.optional_afi()?;
        self.cursor.expect_keyword("to")?;
        self.peering()?;
        if self.cursor.eat_keyword("action") {
            self.action()?;
        }
        if self.cursor.eat_keyword("networks") {
            self.filter()?;
        }
        self.finish()
    }

    // Aggregation

    fn components(&mut self) -> ParseResult<()> {
        self.cursor.eat_keyword("atomic");
        if !self.cursor.at_end() && !self.cursor.peek_keyword("protocol") {
            self.filter()?;
        }
        while self.cursor.eat_keyword("protocol") {
            self.cursor.expect_word("protocol name")?;
            self.filter()?;
        }
        self.cursor.expect_end()
    }

    fn inject(&mut self) -> ParseResult<()> {
        let mut clauses = 0;
        if self.cursor.eat_keyword("at") {
            self.router_expression()?;
            clauses += 1;
        }
        if self.cursor.eat_keyword("action") {
            self.action()?;
            clauses += 1;
        }
        if self.cursor.eat_keyword("upon") {
            self.condition()?;
            clauses += 1;
        }
        if clauses == 0 {
            return Err(ParseError::expected("at, action or upon", self.cursor.describe_next()));
        }
        self.finish()
    }

    fn condition(&mut self) -> ParseResult<()> {
        self.condition_term()?;
        while self.cursor.eat_any_keyword(&["and", "or"]) {
            self.condition_term()?;
        }
        Ok(())
    }

    fn condition_term(&mut self) -> ParseResult<()> {
        if self.cursor.eat_punct('(') {
            self.condition()?;
            return self.cursor.expect_punct(')');
        }
        if self.cursor.eat_keyword("not") {
            return self.condition_term();
        }
        let word = self.cursor.expect_word("condition")?;
        if word.eq_ignore_ascii_case("STATIC") {
            Ok(())
        } else if word.eq_ignore_ascii_case("HAVE-COMPONENTS") || word.eq_ignore_ascii_case("EXCLUDE")
        {
            self.cursor.expect_punct('{')?;
            self.prefix_set()
        } else {
            Err(ParseError::expected("condition", word))
        }
    }

    fn aggr_mtd(&mut self) -> ParseResult<()> {
        let word = self.cursor.expect_word("inbound or outbound")?;
        if word.eq_ignore_ascii_case("inbound") {
            return self.cursor.expect_end();
        }
        if !word.eq_ignore_ascii_case("outbound") {
            return Err(ParseError::expected("inbound or outbound", word));
        }
        if !self.cursor.at_end() {
            self.as_expression()?;
        }
        self.cursor.expect_end()
    }

    // Router objects

    fn masklen(&mut self, max: u8) -> ParseResult<()> {
        self.cursor.expect_keyword("masklen")?;
        let length = self.cursor.expect_word("mask length")?;
        match length.parse::<u8>() {
            Ok(length) if length <= max => Ok(()),
            _ => Err(ParseError::out_of_range("masklen", length)),
        }
    }

    fn ifaddr(&mut self) -> ParseResult<()> {
        let address = self.cursor.expect_word("IPv4 address")?;
        parse_ipv4_address(address)?;
        self.masklen(32)?;
        if self.cursor.eat_keyword("action") {
            self.action()?;
        }
        self.finish()
    }

    fn interface(&mut self) -> ParseResult<()> {
        let address = self.cursor.expect_word("interface address")?;
        let max = match parse_address_or_prefix(address, Family::Multiprotocol)? {
            IpPrefix::V4(prefix) if prefix.length == 32 => 32,
            IpPrefix::V6(prefix) if prefix.length == 128 => 128,
            _ => return Err(ParseError::expected("interface address", address)),
        };
        self.masklen(max)?;
        if self.cursor.eat_keyword("action") {
            self.action()?;
        }
        if self.cursor.eat_keyword("tunnel") {
            let remote = self.cursor.expect_word("tunnel endpoint")?;
            parse_address_or_prefix(remote, Family::Multiprotocol)?;
            self.cursor.expect_punct(',')?;
            let encapsulation = self.cursor.expect_word("encapsulation")?;
            if !["GRE", "IPinIP"]
                .iter()
                .any(|name| name.eq_ignore_ascii_case(encapsulation))
            {
                return Err(ParseError::expected("GRE or IPinIP", encapsulation));
            }
        }
        self.finish()
    }

    fn peer(&mut self) -> ParseResult<()> {
        let protocol = self.cursor.expect_word("protocol")?;
        if !PEER_PROTOCOLS
            .iter()
            .any(|name| name.eq_ignore_ascii_case(protocol))
        {
            return Err(ParseError::expected("routing protocol", protocol));
        }
        let target = self.cursor.expect_word("peer")?;
        let is_address = parse_address_or_prefix(target, self.family)
            .map(|prefix| prefix.length() == prefix.max_length())
            .unwrap_or(false);
        if !(is_address
            || is_router_name(target)
            || is_set_name(SetKind::RtrSet, target)
            || is_set_name(SetKind::PeeringSet, target))
        {
            return Err(ParseError::expected("peer address or name", target));
        }
        while !self.cursor.at_end() {
            self.cursor.expect_word("peer option")?;
            self.cursor.skip_group()?;
            if !self.cursor.eat_punct(',') {
                break;
            }
        }
        self.cursor.expect_end()
    }

    fn mnt_routes(&mut self) -> ParseResult<()> {
        let mntner = self.cursor.expect_word("maintainer name")?;
        if !is_mntner_name(mntner) {
            return Err(ParseError::expected("maintainer name", mntner));
        }
        if self.cursor.eat_keyword("ANY") {
            return self.cursor.expect_end();
        }
        if self.cursor.eat_punct('{') {
            self.prefix_set()?;
        }
        self.cursor.expect_end()
    }
}

/// Split a leading action attribute off a word, as in `pref=100` or
/// `community.append`.
fn split_action_attribute(word: &str) -> Option<(&'static str, &str)> {
    ACTION_ATTRIBUTES.iter().find_map(|attribute| {
        let head = word.get(..attribute.len())?;
        head.eq_ignore_ascii_case(attribute)
            .then(|| (*attribute, &word[attribute.len()..]))
    })
}

fn is_identifier(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_integer(what: &'static str, value: &str, max: u32) -> ParseResult<()> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::expected("integer", value));
    }
    match value.parse::<u32>() {
        Ok(number) if number <= max => Ok(()),
        _ => Err(ParseError::out_of_range(what, value)),
    }
}

fn check_community(value: &str) -> ParseResult<()> {
    if WELL_KNOWN_COMMUNITIES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(value))
    {
        return Ok(());
    }
    match value.split_once(':') {
        Some((high, low)) => {
            check_integer("community", high, u16::MAX.into())?;
            check_integer("community", low, u16::MAX.into())
        }
        None => check_integer("community", value, u32::MAX),
    }
}

fn check_action_value(attribute: &'static str, value: &str, family: Family) -> ParseResult<()> {
    match attribute {
        "pref" | "cost" => check_integer(attribute, value, u16::MAX.into()),
        "dpa" => check_integer(attribute, value, u32::MAX),
        "med" if value.eq_ignore_ascii_case("igp_cost") => Ok(()),
        "med" => check_integer(attribute, value, u16::MAX.into()),
        "community" => check_community(value),
        "next-hop" => {
            if value.eq_ignore_ascii_case("self") || parse_ipv4_address(value).is_ok() {
                Ok(())
            } else if family.allows_ipv6() {
                parse_ipv6_address(value).map(|_| ())
            } else {
                Err(ParseError::expected("next-hop address", value))
            }
        }
        _ => Err(ParseError::expected("aspath.prepend(...)", value)),
    }
}

fn is_attribute_method(word: &str) -> bool {
    let mut parts = word.splitn(2, '.');
    let attribute = parts.next().unwrap_or_default();
    let valid = |part: &str| {
        !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    };
    valid(attribute) && parts.next().is_none_or(valid)
}

fn run<F>(input: &str, family: Family, parse: F) -> ParseResult<()>
where
    F: for<'t, 'a> FnOnce(&mut PolicyParser<'t, 'a>) -> ParseResult<()>,
{
    let tokens = tokenize(input)?;
    let mut parser = PolicyParser::new(&tokens, family);
    parse(&mut parser)
}

pub fn parse_import(input: &str, family: Family) -> ParseResult<()> {
    run(input, family, |p| p.policy(Direction::Import))
}

pub fn parse_export(input: &str, family: Family) -> ParseResult<()> {
    run(input, family, |p| p.policy(Direction::Export))
}

pub fn parse_import_via(input: &str) -> ParseResult<()> {
    run(input, Family::Multiprotocol, |p| p.via_policy(Direction::Import))
}

pub fn parse_export_via(input: &str) -> ParseResult<()> {
    run(input, Family::Multiprotocol, |p| p.via_policy(Direction::Export))
}

pub fn parse_default(input: &str, family: Family) -> ParseResult<()> {
    run(input, family, |p| p.default())
}

pub fn parse_filter(input: &str, family: Family) -> ParseResult<()> {
    run(input, family, |p| {
        p.filter()?;
        p.cursor.expect_end()
    })
}

pub fn parse_peering(input: &str, family: Family) -> ParseResult<()> {
    run(input, family, |p| {
        p.peering()?;
        p.cursor.expect_end()
    })
}

pub fn parse_as_expression(input: &str) -> ParseResult<()> {
    run(input, Family::Ipv4, |p| {
        p.as_expression()?;
        p.cursor.expect_end()
    })
}

pub fn parse_components(input: &str, family: Family) -> ParseResult<()> {
    run(input, family, |p| p.components())
}

pub fn parse_inject(input: &str, family: Family) -> ParseResult<()> {
    run(input, family, |p| p.inject())
}

pub fn parse_aggr_mtd(input: &str) -> ParseResult<()> {
    run(input, Family::Ipv4, |p| p.aggr_mtd())
}

pub fn parse_ifaddr(input: &str) -> ParseResult<()> {
    run(input, Family::Ipv4, |p| p.ifaddr())
}

pub fn parse_interface(input: &str) -> ParseResult<()> {
    run(input, Family::Multiprotocol, |p| p.interface())
}

pub fn parse_peer(input: &str, family: Family) -> ParseResult<()> {
    run(input, family, |p| p.peer())
}

pub fn parse_mnt_routes(input: &str, family: Family) -> ParseResult<()> {
    run(input, family, |p| p.mnt_routes())
}

/// A set name optionally followed by a range operator, as in `RS-FOO^+`.
pub fn parse_set_with_range(kind: SetKind, input: &str) -> ParseResult<Option<RangeOperator>> {
    let input = input.trim();
    let (base, operator) = match input.find('^') {
        Some(pos) => (&input[..pos], Some(&input[pos..])),
        None => (input, None),
    };
    if !is_set_name(kind, base) {
        return Err(ParseError::expected(kind.prefix(), base));
    }
    operator.map(parse_range_operator).transpose()
}
