//! Reference targets, cardinality and attribute lookup.

use super::{apnic, ripe};
use rpsl_schema::{AttributeNotFound, Cardinality, ObjectType};

#[test]
fn test_contact_references() {
    for attribute in ["admin-c", "tech-c", "author"] {
        assert_eq!(
            apnic().references(attribute, "EX1-AP").expect("known attribute"),
            &[ObjectType::Person, ObjectType::Role]
        );
    }
    assert_eq!(
        apnic().references("abuse-c", "EN1-AP").expect("known attribute"),
        &[ObjectType::Role]
    );
}

#[test]
fn test_single_target_references() {
    let cases = [
        ("mnt-by", "MAINT-EXAMPLE", ObjectType::Mntner),
        ("mbrs-by-ref", "MAINT-EXAMPLE", ObjectType::Mntner),
        ("org", "ORG-EA1-AP", ObjectType::Organisation),
        ("sponsoring-org", "ORG-EA1-AP", ObjectType::Organisation),
        ("mnt-irt", "IRT-EXAMPLE", ObjectType::Irt),
        ("origin", "AS64500", ObjectType::AutNum),
        ("local-as", "AS64500", ObjectType::AutNum),
        ("form", "FORM-HAIKU", ObjectType::PoeticForm),
    ];
    for (attribute, value, target) in cases {
        assert_eq!(
            apnic().references(attribute, value).expect("known attribute"),
            &[target],
            "{}",
            attribute
        );
    }
}

#[test]
fn test_auth_references_depend_on_scheme() {
    assert_eq!(
        apnic().references("auth", "PGPKEY-1A2B3C4D").expect("auth"),
        &[ObjectType::KeyCert]
    );
    assert!(
        apnic()
            .references("auth", "MD5-PW $1$abcdefgh$abcdefghijklmnopqrstuv")
            .expect("auth")
            .is_empty()
    );
    assert!(
        apnic()
            .references("auth", "md5-pw $1$$abcdefghijklmnopqrstuv")
            .expect("auth")
            .is_empty()
    );
}

#[test]
fn test_free_text_references_nothing() {
    for attribute in ["descr", "remarks", "source", "e-mail"] {
        assert!(
            apnic().references(attribute, "anything").expect("known").is_empty(),
            "{}",
            attribute
        );
    }
}

#[test]
fn test_set_references() {
    let member_of = apnic().references("member-of", "AS-EXAMPLE").expect("member-of");
    assert!(member_of.contains(&ObjectType::AsSet));
    assert!(member_of.contains(&ObjectType::RouteSet));
    assert!(member_of.contains(&ObjectType::RtrSet));

    let members = apnic().references("members", "AS64500").expect("members");
    assert!(members.contains(&ObjectType::AutNum));
    assert!(members.contains(&ObjectType::InetRtr));
}

#[test]
fn test_cardinality() {
    let list = ["members", "mp-members", "member-of", "mnt-by", "mnt-irt", "holes"];
    for attribute in list {
        assert_eq!(apnic().cardinality(attribute), Ok(Cardinality::List), "{}", attribute);
    }
    let single = ["descr", "import", "mnt-routes", "nic-hdl", "source", "changed"];
    for attribute in single {
        assert_eq!(apnic().cardinality(attribute), Ok(Cardinality::Single), "{}", attribute);
    }
}

#[test]
fn test_lookup_by_name_flag_and_alias() {
    let catalog = apnic();
    let by_name = catalog.attribute("mnt-by").expect("name");
    assert_eq!(catalog.attribute("mb").expect("flag").name, by_name.name);
    assert_eq!(catalog.attribute("*mb").expect("alias").name, by_name.name);
    assert!(catalog.attribute("*mnt-by").is_err());
    assert!(catalog.attribute("*inetnum").is_err());
    assert_eq!(catalog.attribute("MNT-BY").expect("upper case").name, by_name.name);
    assert_eq!(
        catalog.attribute("mnt-byy").err(),
        Some(AttributeNotFound("mnt-byy".to_string()))
    );
}

#[test]
fn test_flags_are_unique_per_catalog() {
    for catalog in [apnic(), ripe()] {
        let mut flags: Vec<&str> = catalog.attributes().map(|attribute| attribute.flag).collect();
        let count = flags.len();
        flags.sort_unstable();
        flags.dedup();
        assert_eq!(flags.len(), count);
    }
}

#[test]
fn test_template_attributes_resolve() {
    for catalog in [apnic(), ripe()] {
        for template in catalog.templates() {
            for entry in template.entries() {
                let attribute = catalog.attribute(entry.attribute).expect("resolves");
                assert_eq!(attribute.name, entry.attribute);
            }
        }
    }
}
