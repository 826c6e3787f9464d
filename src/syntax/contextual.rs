//! Syntaxes whose accepted values depend on the object type.
//!
//! `members` on an as-set holds AS numbers, on a route-set prefixes, on an
//! rtr-set routers. `holes` on a route is an IPv4 prefix, on a route6 an
//! IPv6 one. Each case is an explicit match on [`ObjectType`]; object types
//! without a case never match.

use crate::object::ObjectType;
use crate::parser::address::{
    IpPrefix, parse_address_or_prefix, parse_address_prefix_range, parse_ipv4_prefix,
    parse_ipv6_prefix, parse_range_operator,
};
use crate::parser::autnum::parse_as_number;
use crate::parser::names::{SetKind, is_router_name, is_set_name};
use crate::parser::policy::{parse_components, parse_filter, parse_inject, parse_set_with_range};
use crate::parser::{Family, ParseResult};

/// The closed set of `status` values per object type.
///
/// Vocabularies are data: each dialect supplies its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusVocabulary {
    pub inetnum: &'static [&'static str],
    pub inet6num: &'static [&'static str],
    pub aut_num: &'static [&'static str],
}

impl StatusVocabulary {
    pub fn values_for(&self, object_type: ObjectType) -> &'static [&'static str] {
        match object_type {
            ObjectType::Inetnum => self.inetnum,
            ObjectType::Inet6num => self.inet6num,
            ObjectType::AutNum => self.aut_num,
            _ => &[],
        }
    }

    pub fn contains(&self, object_type: ObjectType, value: &str) -> bool {
        let value = value.split_whitespace().collect::<Vec<_>>().join(" ");
        self.values_for(object_type)
            .iter()
            .any(|status| status.eq_ignore_ascii_case(&value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextualSyntax {
    Status(&'static StatusVocabulary),
    Members { multiprotocol: bool },
    MemberOf,
    Holes,
    Pingable,
    Components,
    ExportComps,
    Inject,
}

/// The address family of a route object's key.
fn route_family(object_type: ObjectType) -> Option<Family> {
    match object_type {
        ObjectType::Route => Some(Family::Ipv4),
        ObjectType::Route6 => Some(Family::Multiprotocol),
        _ => None,
    }
}

fn family_of(multiprotocol: bool) -> Family {
    if multiprotocol {
        Family::Multiprotocol
    } else {
        Family::Ipv4
    }
}

fn as_set_member(value: &str) -> bool {
    parse_as_number(value).is_ok() || is_set_name(SetKind::AsSet, value)
}

fn route_set_member(value: &str, family: Family) -> bool {
    if parse_address_prefix_range(value, family).is_ok() {
        return true;
    }
    let value = value.trim();
    let base = value.split('^').next().unwrap_or(value);
    let operator_ok = |kind: SetKind| parse_set_with_range(kind, value).is_ok();
    operator_ok(SetKind::RouteSet)
        || operator_ok(SetKind::AsSet)
        || (parse_as_number(base).is_ok()
            && (base.len() == value.len()
                || parse_range_operator(&value[base.len()..]).is_ok()))
}

fn rtr_set_member(value: &str, family: Family) -> bool {
    let value = value.trim();
    parse_address_or_prefix(value, family).is_ok()
        || is_router_name(value)
        || is_set_name(SetKind::RtrSet, value)
}

/// A prefix of the route's own family: IPv4 under route, IPv6 under route6.
fn route_prefix(object_type: ObjectType, value: &str) -> bool {
    match object_type {
        ObjectType::Route => parse_ipv4_prefix(value).is_ok(),
        ObjectType::Route6 => parse_ipv6_prefix(value).is_ok(),
        _ => false,
    }
}

/// A host address or prefix of the route's own family.
fn route_address(object_type: ObjectType, value: &str) -> bool {
    let Some(family) = route_family(object_type) else {
        return false;
    };
    match parse_address_or_prefix(value, family) {
        Ok(IpPrefix::V4(_)) => object_type == ObjectType::Route,
        Ok(IpPrefix::V6(_)) => object_type == ObjectType::Route6,
        Err(_) => false,
    }
}

fn route_grammar(
    object_type: ObjectType,
    value: &str,
    parse: fn(&str, Family) -> ParseResult<()>,
) -> bool {
    route_family(object_type).is_some_and(|family| parse(value, family).is_ok())
}

impl ContextualSyntax {
    pub fn matches(&self, object_type: ObjectType, value: &str) -> bool {
        match *self {
            ContextualSyntax::Status(vocabulary) => vocabulary.contains(object_type, value),
            ContextualSyntax::Members { multiprotocol } => match object_type {
                ObjectType::AsSet => as_set_member(value),
                ObjectType::RouteSet => route_set_member(value, family_of(multiprotocol)),
                ObjectType::RtrSet => rtr_set_member(value, family_of(multiprotocol)),
                _ => false,
            },
            ContextualSyntax::MemberOf => match object_type {
                ObjectType::AutNum => is_set_name(SetKind::AsSet, value.trim()),
                ObjectType::Route | ObjectType::Route6 => {
                    is_set_name(SetKind::RouteSet, value.trim())
                }
                ObjectType::InetRtr => is_set_name(SetKind::RtrSet, value.trim()),
                _ => false,
            },
            ContextualSyntax::Holes => route_prefix(object_type, value),
            ContextualSyntax::Pingable => route_address(object_type, value),
            ContextualSyntax::Components => route_grammar(object_type, value, parse_components),
            ContextualSyntax::ExportComps => route_grammar(object_type, value, parse_filter),
            ContextualSyntax::Inject => route_grammar(object_type, value, parse_inject),
        }
    }

    pub fn describe(&self, object_type: ObjectType) -> String {
        let text = match (*self, object_type) {
            (ContextualSyntax::Status(vocabulary), _) => {
                let values = vocabulary.values_for(object_type);
                if values.is_empty() {
                    return String::new();
                }
                return format!("Status can have one of these values:\n\n{}", values.join("\n"));
            }
            (ContextualSyntax::Members { .. }, ObjectType::AsSet) => {
                "list of\n<as-number> or\n<as-set-name>"
            }
            (ContextualSyntax::Members { multiprotocol: false }, ObjectType::RouteSet) => {
                "list of\n<address-prefix-range> or\n<route-set-name> or\n<route-set-name><range-operator>"
            }
            (ContextualSyntax::Members { multiprotocol: true }, ObjectType::RouteSet) => {
                "list of\n<ipv4-address-prefix-range> or\n<ipv6-address-prefix-range> or\n\
                 <route-set-name> or\n<route-set-name><range-operator>"
            }
            (ContextualSyntax::Members { multiprotocol: false }, ObjectType::RtrSet) => {
                "list of\n<inet-rtr-name> or\n<rtr-set-name> or\n<ipv4-address>"
            }
            (ContextualSyntax::Members { multiprotocol: true }, ObjectType::RtrSet) => {
                "list of\n<inet-rtr-name> or\n<rtr-set-name> or\n<ipv4-address> or\n<ipv6-address>"
            }
            (ContextualSyntax::MemberOf, ObjectType::AutNum) => "list of <as-set-name>",
            (ContextualSyntax::MemberOf, ObjectType::Route | ObjectType::Route6) => {
                "list of <route-set-name>"
            }
            (ContextualSyntax::MemberOf, ObjectType::InetRtr) => "list of <rtr-set-name>",
            (ContextualSyntax::Holes, ObjectType::Route) => "list of <ipv4-address-prefix>",
            (ContextualSyntax::Holes, ObjectType::Route6) => "list of <ipv6-address-prefix>",
            (ContextualSyntax::Pingable, ObjectType::Route) => "<ipv4-address>",
            (ContextualSyntax::Pingable, ObjectType::Route6) => "<ipv6-address>",
            (ContextualSyntax::Components, ObjectType::Route) => {
                "[ATOMIC] [[<filter>] [protocol <protocol> <filter> ...]]"
            }
            (ContextualSyntax::Components, ObjectType::Route6) => {
                "[ATOMIC] [[<mp-filter>] [protocol <protocol> <mp-filter> ...]]"
            }
            (ContextualSyntax::ExportComps, ObjectType::Route) => "<filter>",
            (ContextualSyntax::ExportComps, ObjectType::Route6) => "<mp-filter>",
            (ContextualSyntax::Inject, ObjectType::Route) => {
                "[at <router-expression>] [action <action>] [upon <condition>]"
            }
            (ContextualSyntax::Inject, ObjectType::Route6) => {
                "[at <mp-router-expression>] [action <action>] [upon <condition>]"
            }
            _ => "",
        };
        text.to_string()
    }
}
