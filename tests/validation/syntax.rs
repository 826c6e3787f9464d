//! Attribute value syntax tests.
//!
//! Values are checked through the catalog, the way validation sees them,
//! with property tests for numeric boundaries and for matchers that must
//! never panic on arbitrary input.

use super::apnic;
use proptest::prelude::*;
use rpsl_schema::ObjectType;

fn valid(object_type: ObjectType, attribute: &str, value: &str) -> bool {
    apnic()
        .is_valid(object_type, attribute, value)
        .unwrap_or_else(|e| panic!("{}", e))
}

#[test]
fn test_inetnum_ranges() {
    assert!(valid(ObjectType::Inetnum, "inetnum", "192.168.1.0/24"));
    assert!(valid(ObjectType::Inetnum, "inetnum", "192.0.2.0 - 192.0.2.255"));
    assert!(!valid(ObjectType::Inetnum, "inetnum", "300.300.300.300"));
    assert!(!valid(ObjectType::Inetnum, "inetnum", "192.0.2.255 - 192.0.2.0"));
    assert!(!valid(ObjectType::Inetnum, "inetnum", ""));
}

#[test]
fn test_inet6num_prefixes() {
    assert!(valid(ObjectType::Inet6num, "inet6num", "2001:db8::/32"));
    assert!(!valid(ObjectType::Inet6num, "inet6num", "2001:db8::/129"));
    assert!(!valid(ObjectType::Inet6num, "inet6num", "192.0.2.0/24"));
}

#[test]
fn test_as_number_boundaries() {
    assert!(valid(ObjectType::AutNum, "aut-num", "AS0"));
    assert!(valid(ObjectType::AutNum, "aut-num", "AS4294967295"));
    assert!(!valid(ObjectType::AutNum, "aut-num", "AS4294967296"));
    assert!(!valid(ObjectType::AutNum, "aut-num", "AS"));
    assert!(valid(ObjectType::AsBlock, "as-block", "AS64496 - AS64511"));
    assert!(!valid(ObjectType::AsBlock, "as-block", "AS64511 - AS64496"));
}

#[test]
fn test_status_vocabulary_by_object_type() {
    assert!(valid(ObjectType::Inetnum, "status", "ALLOCATED PORTABLE"));
    assert!(!valid(ObjectType::Inetnum, "status", "ALLOCATED PA"));
    assert!(!valid(ObjectType::Inet6num, "status", "ALLOCATED PORTABLE"));
    assert!(valid(ObjectType::Inet6num, "status", "ASSIGNED PI"));
}

#[test]
fn test_members_by_object_type() {
    assert!(valid(ObjectType::RouteSet, "members", "195.66.224.0/23"));
    assert!(!valid(ObjectType::RouteSet, "members", "2a00:10C0::/32"));
    assert!(valid(ObjectType::RouteSet, "mp-members", "2a00:10C0::/32"));
    assert!(valid(ObjectType::RtrSet, "mp-members", "2a00:10C0::/32"));
    assert!(valid(ObjectType::AsSet, "members", "AS64500, AS-OTHER"));
    assert!(!valid(ObjectType::AsSet, "members", "AS64500, 192.0.2.0/24"));
    assert!(!valid(ObjectType::Person, "members", "AS64500"));
}

#[test]
fn test_nic_handles_and_names() {
    assert!(valid(ObjectType::Person, "nic-hdl", "EX1-AP"));
    assert!(valid(ObjectType::Person, "nic-hdl", "AUTO-1"));
    assert!(!valid(ObjectType::Person, "nic-hdl", "not a handle"));
    assert!(valid(ObjectType::Mntner, "mntner", "MAINT-EXAMPLE"));
    assert!(!valid(ObjectType::Mntner, "mntner", "-MAINT"));
    assert!(valid(ObjectType::AsSet, "as-set", "AS64500:AS-CUSTOMERS"));
    assert!(!valid(ObjectType::AsSet, "as-set", "RS-CUSTOMERS"));
}

#[test]
fn test_policy_attributes() {
    assert!(valid(ObjectType::AutNum, "import", "from AS64501 accept ANY"));
    assert!(!valid(ObjectType::AutNum, "import", "from AS64501 accept { 2001:db8::/32 }"));
    assert!(valid(
        ObjectType::AutNum,
        "mp-import",
        "afi ipv6.unicast from AS64501 accept { 2001:db8::/32^48 }"
    ));
    assert!(valid(ObjectType::AutNum, "export", "to AS64501 announce AS-EXAMPLE"));
    assert!(!valid(ObjectType::AutNum, "export", "to AS64501 accept ANY"));
}

#[test]
fn test_policy_actions_are_checked() {
    assert!(valid(
        ObjectType::AutNum,
        "import",
        "from AS1 action pref=100; community.append(65000:1); accept ANY"
    ));
    for garbage in ["pref 100;", "!!! ??? ;", "= = =;", "42"] {
        let value = format!("from AS1 action {} accept ANY", garbage);
        assert!(!valid(ObjectType::AutNum, "import", &value), "{}", value);
        assert!(!valid(ObjectType::AutNum, "mp-import", &value), "{}", value);
    }
    assert!(!valid(ObjectType::AutNum, "default", "to AS1 action med=x; networks ANY"));
    assert!(valid(ObjectType::Route, "inject", "at 192.0.2.1 action dpa = 100;"));
    assert!(!valid(ObjectType::Route, "inject", "at 192.0.2.1 action ~~~ nonsense;"));
}

#[test]
fn test_route_dependent_syntaxes() {
    assert!(valid(ObjectType::Route, "holes", "192.0.2.0/25, 192.0.2.128/25"));
    assert!(!valid(ObjectType::Route, "holes", "2001:db8::/48"));
    assert!(valid(ObjectType::Route6, "holes", "2001:db8::/48"));
    assert!(valid(ObjectType::Route, "pingable", "192.0.2.1"));
    assert!(!valid(ObjectType::Route6, "pingable", "192.0.2.1"));
    assert!(valid(ObjectType::Route, "member-of", "RS-EXAMPLE"));
    assert!(valid(ObjectType::AutNum, "member-of", "AS-EXAMPLE"));
    assert!(!valid(ObjectType::AutNum, "member-of", "RS-EXAMPLE"));
}

#[test]
fn test_misc_syntaxes() {
    assert!(valid(ObjectType::Person, "e-mail", "john@example.net"));
    assert!(!valid(ObjectType::Person, "e-mail", "john.example.net"));
    assert!(valid(ObjectType::Person, "changed", "john@example.net 20240131"));
    assert!(!valid(ObjectType::Person, "changed", "john@example.net 20240231"));
    assert!(valid(ObjectType::Person, "phone", "+61 7 3858 3100"));
    assert!(!valid(ObjectType::Person, "phone", "3858 3100"));
    assert!(valid(ObjectType::Domain, "domain", "2.0.192.in-addr.arpa"));
    assert!(!valid(ObjectType::Domain, "domain", "example.net"));
    assert!(valid(ObjectType::Inetnum, "country", "AU"));
    assert!(!valid(ObjectType::Inetnum, "country", "AUS"));
    assert!(valid(ObjectType::Person, "remarks", "anything at all"));
}

#[test]
fn test_lookup_miss_is_an_error() {
    assert!(apnic().is_valid(ObjectType::Person, "frobnicate", "x").is_err());
}

const SYNTAX_SAMPLES: &[(ObjectType, &str)] = &[
    (ObjectType::AutNum, "import"),
    (ObjectType::AutNum, "mp-export"),
    (ObjectType::AutNum, "aut-num"),
    (ObjectType::Inetnum, "inetnum"),
    (ObjectType::Inetnum, "status"),
    (ObjectType::Inet6num, "inet6num"),
    (ObjectType::RouteSet, "members"),
    (ObjectType::RtrSet, "mp-members"),
    (ObjectType::Route, "components"),
    (ObjectType::Route6, "inject"),
    (ObjectType::FilterSet, "mp-filter"),
    (ObjectType::InetRtr, "interface"),
    (ObjectType::Domain, "ds-rdata"),
    (ObjectType::Person, "nic-hdl"),
    (ObjectType::Person, "changed"),
];

proptest! {
    #[test]
    fn prop_as_numbers_within_32_bits_are_valid(n in any::<u32>()) {
        let value = format!("AS{}", n);
        prop_assert!(valid(ObjectType::AutNum, "aut-num", &value));
    }

    #[test]
    fn prop_as_numbers_beyond_32_bits_are_invalid(n in (u32::MAX as u64 + 1)..=u64::MAX) {
        let value = format!("AS{}", n);
        prop_assert!(!valid(ObjectType::AutNum, "aut-num", &value));
    }

    #[test]
    fn prop_ipv4_prefix_lengths(address in any::<u32>(), len in 0u32..=40) {
        let network = if len == 0 || len > 32 { 0 } else { address & (u32::MAX << (32 - len)) };
        let value = format!("{}/{}", std::net::Ipv4Addr::from(network), len);
        prop_assert_eq!(valid(ObjectType::Route, "route", &value), len <= 32);
    }

    #[test]
    fn prop_ipv4_host_bits_are_rejected(address in 1u32..=u32::MAX) {
        let value = format!("{}/0", std::net::Ipv4Addr::from(address));
        prop_assert!(!valid(ObjectType::Route, "route", &value));
    }

    #[test]
    fn prop_matchers_never_panic(input in "\\PC{0,64}") {
        for (object_type, attribute) in SYNTAX_SAMPLES {
            let _ = valid(*object_type, attribute, &input);
        }
    }

    #[test]
    fn prop_policy_like_input_never_panics(
        input in "(from|to|afi|accept|announce|AS[0-9]{1,5}|\\{|\\}|\\(|\\)|;|,|\\^\\+|192\\.0\\.2\\.0/24|AND|OR|NOT| )*"
    ) {
        let _ = valid(ObjectType::AutNum, "import", &input);
        let _ = valid(ObjectType::AutNum, "mp-import", &input);
        let _ = valid(ObjectType::Route, "inject", &input);
    }
}
