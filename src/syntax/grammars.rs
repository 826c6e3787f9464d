//! Syntaxes backed by the grammar parsers.

use super::{ParserSyntax, Syntax};
use crate::parser::names::{SetKind, is_router_name, parse_set_name};
use crate::parser::{Family, ParseError, address, autnum, misc, policy};

pub static AS_NUMBER: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| autnum::parse_as_number(value).map(drop),
    description: "An AS number of the form AS<n>, where n is between 0 and 4294967295.",
});

pub static AS_BLOCK: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| autnum::parse_as_block(value).map(drop),
    description: "<as-number> - <as-number>, the first not greater than the second.",
});

pub static AS_SET_NAME: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| parse_set_name(SetKind::AsSet, value),
    description: "An as-set name: 'AS-' followed by letters, digits, '_' and '-', \
                  optionally hierarchical with ':'.",
});

pub static ROUTE_SET_NAME: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| parse_set_name(SetKind::RouteSet, value),
    description: "A route-set name: 'RS-' followed by letters, digits, '_' and '-', \
                  optionally hierarchical with ':'.",
});

pub static RTR_SET_NAME: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| parse_set_name(SetKind::RtrSet, value),
    description: "An rtr-set name: 'RTRS-' followed by letters, digits, '_' and '-', \
                  optionally hierarchical with ':'.",
});

pub static FILTER_SET_NAME: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| parse_set_name(SetKind::FilterSet, value),
    description: "A filter-set name: 'FLTR-' followed by letters, digits, '_' and '-', \
                  optionally hierarchical with ':'.",
});

pub static PEERING_SET_NAME: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| parse_set_name(SetKind::PeeringSet, value),
    description: "A peering-set name: 'PRNG-' followed by letters, digits, '_' and '-', \
                  optionally hierarchical with ':'.",
});

pub static IPV4_RANGE: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| address::parse_ipv4_range(value).map(drop),
    description: "<ipv4-address> - <ipv4-address>, or an IPv4 prefix.",
});

pub static IPV4_PREFIX: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| address::parse_ipv4_prefix(value).map(drop),
    description: "An IPv4 address prefix in CIDR notation.",
});

pub static IPV6_PREFIX: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| address::parse_ipv6_prefix(value).map(drop),
    description: "An IPv6 address prefix in CIDR notation.",
});

pub static ROUTER_NAME: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| {
        let value = value.trim();
        if is_router_name(value) {
            Ok(())
        } else {
            Err(ParseError::expected("fully qualified domain name", value))
        }
    },
    description: "A fully qualified DNS name.",
});

pub static EMAIL: Syntax = Syntax::Parser(ParserSyntax {
    parse: misc::parse_email,
    description: "An e-mail address as defined in RFC 2822.",
});

pub static CHANGED: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| misc::parse_changed(value).map(drop),
    description: "An e-mail address optionally followed by a date in YYYYMMDD format.",
});

pub static TIMESTAMP: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| misc::parse_timestamp(value).map(drop),
    description: "An RFC 3339 timestamp, generated by the registry.",
});

pub static DS_RDATA: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| misc::parse_ds_rdata(value).map(drop),
    description: "<keytag> <algorithm> <digest-type> <digest>, as in a DS resource record.",
});

pub static NSERVER: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| misc::parse_nserver(value).map(drop),
    description: "A host name, optionally followed by its glue address.",
});

pub static REVERSE_DOMAIN: Syntax = Syntax::Parser(ParserSyntax {
    parse: misc::parse_reverse_domain,
    description: "A reverse delegation zone under in-addr.arpa, ip6.arpa or e164.arpa.",
});

pub static GEOLOC: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| misc::parse_geoloc(value).map(drop),
    description: "<latitude> <longitude> in decimal degrees.",
});

pub static ASSIGNMENT_SIZE: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| misc::parse_assignment_size(value).map(drop),
    description: "A prefix length between 1 and 128.",
});

pub static IMPORT: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| policy::parse_import(value, Family::Ipv4),
    description: "[protocol <protocol-1>] [into <protocol-2>] from <peering-1> [action <action-1>] \
                  ... accept <filter>",
});

pub static MP_IMPORT: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| policy::parse_import(value, Family::Multiprotocol),
    description: "[protocol <protocol-1>] [into <protocol-2>] afi <afi-list> from <mp-peering-1> \
                  [action <action-1>] ... accept <mp-filter>",
});

pub static EXPORT: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| policy::parse_export(value, Family::Ipv4),
    description: "[protocol <protocol-1>] [into <protocol-2>] to <peering-1> [action <action-1>] \
                  ... announce <filter>",
});

pub static MP_EXPORT: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| policy::parse_export(value, Family::Multiprotocol),
    description: "[protocol <protocol-1>] [into <protocol-2>] afi <afi-list> to <mp-peering-1> \
                  [action <action-1>] ... announce <mp-filter>",
});

pub static IMPORT_VIA: Syntax = Syntax::Parser(ParserSyntax {
    parse: policy::parse_import_via,
    description: "[protocol <protocol-1>] [into <protocol-2>] [afi <afi-list>] <peering> \
                  from <mp-peering-1> ... accept <mp-filter>",
});

pub static EXPORT_VIA: Syntax = Syntax::Parser(ParserSyntax {
    parse: policy::parse_export_via,
    description: "[protocol <protocol-1>] [into <protocol-2>] [afi <afi-list>] <peering> \
                  to <mp-peering-1> ... announce <mp-filter>",
});

pub static DEFAULT: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| policy::parse_default(value, Family::Ipv4),
    description: "to <peering> [action <action>] [networks <filter>]",
});

pub static MP_DEFAULT: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| policy::parse_default(value, Family::Multiprotocol),
    description: "[afi <afi-list>] to <mp-peering> [action <action>] [networks <mp-filter>]",
});

pub static FILTER: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| policy::parse_filter(value, Family::Ipv4),
    description: "A logical expression which when applied to a set of IPv4 routes returns \
                  a subset of these routes.",
});

pub static MP_FILTER: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| policy::parse_filter(value, Family::Multiprotocol),
    description: "A logical expression which when applied to a set of IPv4 or IPv6 routes \
                  returns a subset of these routes.",
});

pub static PEERING: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| policy::parse_peering(value, Family::Ipv4),
    description: "<as-expression> [<router-expression-1>] [at <router-expression-2>] \
                  | <peering-set-name>",
});

pub static MP_PEERING: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| policy::parse_peering(value, Family::Multiprotocol),
    description: "<as-expression> [<mp-router-expression-1>] [at <mp-router-expression-2>] \
                  | <peering-set-name>",
});

pub static PEER: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| policy::parse_peer(value, Family::Ipv4),
    description: "<protocol> <ipv4-address> <options> | <protocol> <inet-rtr-name> <options> \
                  | <protocol> <rtr-set-name> <options> | <protocol> <peering-set-name> <options>",
});

pub static MP_PEER: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| policy::parse_peer(value, Family::Multiprotocol),
    description: "<protocol> <ipv4- or ipv6-address> <options> | <protocol> <inet-rtr-name> \
                  <options> | <protocol> <rtr-set-name> <options> | <protocol> \
                  <peering-set-name> <options>",
});

pub static IFADDR: Syntax = Syntax::Parser(ParserSyntax {
    parse: policy::parse_ifaddr,
    description: "<ipv4-address> masklen <integer> [action <action>]",
});

pub static INTERFACE: Syntax = Syntax::Parser(ParserSyntax {
    parse: policy::parse_interface,
    description: "<ipv4- or ipv6-address> masklen <integer> [action <action>] \
                  [tunnel <remote-endpoint-address>,<encapsulation>]",
});

pub static AGGR_MTD: Syntax = Syntax::Parser(ParserSyntax {
    parse: policy::parse_aggr_mtd,
    description: "inbound | outbound [<as-expression>]",
});

pub static AS_EXPRESSION: Syntax = Syntax::Parser(ParserSyntax {
    parse: policy::parse_as_expression,
    description: "An expression over AS numbers and AS sets using AND, OR and EXCEPT.",
});

pub static MNT_ROUTES: Syntax = Syntax::Parser(ParserSyntax {
    parse: |value| policy::parse_mnt_routes(value, Family::Multiprotocol),
    description: "<mnt-name> [ { <address-prefix-range> ... } | ANY ]",
});
