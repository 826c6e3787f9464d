//! Object validation and the findings it produces.

use super::{ObjectBuilder, apnic, apnic_objects, ripe, ripe_objects};
use crate::common::fixtures;
use crate::{assert_findings, assert_no_findings};
use rpsl_schema::{FindingKind, ObjectType, RpslObject, ValidationFinding};

#[test]
fn test_apnic_fixtures_are_valid() {
    for text in apnic_objects() {
        let object = RpslObject::parse(text).expect("fixture parses");
        assert_no_findings!(apnic().validate(&object));
    }
}

#[test]
fn test_ripe_fixtures_are_valid() {
    for text in ripe_objects() {
        let object = RpslObject::parse(text).expect("fixture parses");
        assert_no_findings!(ripe().validate(&object));
    }
}

#[test]
fn test_fixtures_cover_every_object_type() {
    let mut covered: Vec<ObjectType> = apnic_objects()
        .into_iter()
        .map(|text| RpslObject::parse(text).expect("fixture parses").object_type())
        .collect();
    covered.sort_by_key(|object_type| object_type.ordinal());
    covered.dedup();
    assert_eq!(covered.len(), ObjectType::ALL.len());
}

#[test]
fn test_missing_source() {
    let object = ObjectBuilder::mntner().without("source").build();
    let messages = apnic().validate(&object);
    assert_findings!(messages, [MissingMandatoryAttribute]);
    assert_eq!(
        messages.object_findings(),
        &[ValidationFinding::MissingMandatoryAttribute {
            attribute: "source".to_string()
        }]
    );
}

#[test]
fn test_second_source() {
    let object = ObjectBuilder::mntner().with("source", "APNIC").build();
    let messages = apnic().validate(&object);
    assert_findings!(messages, [TooManyAttributesOfType]);
    assert_eq!(messages.object_findings()[0].attribute(), "source");
}

#[test]
fn test_multiple_occurrence_is_not_limited() {
    let object = ObjectBuilder::mntner()
        .with("remarks", "one")
        .with("remarks", "two")
        .with("mnt-by", "MAINT-OTHER")
        .build();
    assert_no_findings!(apnic().validate(&object));
}

#[test]
fn test_attribute_not_in_template() {
    let builder = ObjectBuilder::mntner();
    let index = builder.next_index();
    let object = builder.with("person", "John Smith").build();
    let messages = apnic().validate(&object);
    assert_findings!(messages, [InvalidAttributeForObjectType]);
    assert_eq!(
        messages.attribute_findings(index),
        &[ValidationFinding::InvalidAttributeForObjectType {
            attribute: "person".to_string(),
            object_type: ObjectType::Mntner,
        }]
    );
}

#[test]
fn test_unknown_attribute() {
    let builder = ObjectBuilder::person();
    let index = builder.next_index();
    let object = builder.with("favourite-colour", "blue").build();
    let messages = apnic().validate(&object);
    assert_findings!(messages, [UnknownAttribute]);
    assert_eq!(messages.attribute_findings(index)[0].attribute(), "favourite-colour");
}

#[test]
fn test_flags_resolve_like_names() {
    let object = ObjectBuilder::person()
        .without("remarks")
        .with("*rm", "added through the flag")
        .build();
    assert_no_findings!(apnic().validate(&object));

    let doubled = ObjectBuilder::person().with("*so", "APNIC").build();
    assert_findings!(apnic().validate(&doubled), [TooManyAttributesOfType]);
}

#[test]
fn test_syntax_error_reports_clean_value() {
    let builder = ObjectBuilder::person().replace("nic-hdl", "not a handle # comment");
    let index = builder.index_of("nic-hdl");
    let messages = apnic().validate(&builder.build());
    assert_findings!(messages, [SyntaxError]);
    assert_eq!(
        messages.attribute_findings(index),
        &[ValidationFinding::SyntaxError {
            attribute: "nic-hdl".to_string(),
            value: "not a handle".to_string(),
        }]
    );
}

#[test]
fn test_comments_are_ignored() {
    let object = ObjectBuilder::route()
        .replace("origin", "AS64500 # primary origin")
        .build();
    assert_no_findings!(apnic().validate(&object));
}

#[test]
fn test_list_values_are_checked_per_element() {
    let bad_member = ObjectBuilder::route_set()
        .replace("members", "195.66.224.0/23, 2a00:10C0::/32")
        .build();
    assert_findings!(apnic().validate(&bad_member), [SyntaxError]);

    let empty = ObjectBuilder::route_set().replace("members", " , ").build();
    assert_findings!(apnic().validate(&empty), [SyntaxError]);

    let v6 = ObjectBuilder::route_set()
        .replace("mp-members", "195.66.224.0/23, 2a00:10C0::/32")
        .build();
    assert_no_findings!(apnic().validate(&v6));

    let rtr = ObjectBuilder::rtr_set()
        .replace("mp-members", "2a00:10C0::/32")
        .build();
    assert_no_findings!(apnic().validate(&rtr));
}

#[test]
fn test_generated_values_are_not_checked() {
    let object = ObjectBuilder::inetnum()
        .replace("last-modified", "whenever")
        .build();
    assert_no_findings!(apnic().validate(&object));
}

#[test]
fn test_findings_accumulate() {
    let builder = ObjectBuilder::aut_num()
        .without("source")
        .without("mnt-by")
        .replace("aut-num", "AS4294967296")
        .with("country", "NZ")
        .with("frobnicate", "yes");
    let key_index = builder.index_of("aut-num");
    let messages = apnic().validate(&builder.build());

    assert_eq!(messages.error_count(), 5);
    assert_eq!(
        messages.kinds(),
        vec![
            FindingKind::TooManyAttributesOfType,
            FindingKind::MissingMandatoryAttribute,
            FindingKind::MissingMandatoryAttribute,
            FindingKind::SyntaxError,
            FindingKind::UnknownAttribute,
        ]
    );
    assert_eq!(messages.attribute_findings(key_index).len(), 1);
}

#[test]
fn test_route_family_checks() {
    let wrong_family = ObjectBuilder::route6()
        .replace("holes", "192.0.2.0/25")
        .replace("pingable", "192.0.2.1")
        .build();
    assert_findings!(apnic().validate(&wrong_family), [SyntaxError, SyntaxError]);

    let v4 = ObjectBuilder::route().replace("pingable", "2001:db8::1").build();
    assert_findings!(apnic().validate(&v4), [SyntaxError]);
}

#[test]
fn test_dialects_disagree() {
    let ripe_inetnum = RpslObject::parse(fixtures::RIPE_INETNUM).expect("fixture parses");
    let messages = apnic().validate(&ripe_inetnum);
    assert!(messages.has_errors());
    assert!(messages.kinds().contains(&FindingKind::InvalidAttributeForObjectType));
    assert!(messages.kinds().contains(&FindingKind::MissingMandatoryAttribute));

    let apnic_mntner = RpslObject::parse(fixtures::MNTNER).expect("fixture parses");
    let messages = ripe().validate(&apnic_mntner);
    assert!(messages.kinds().contains(&FindingKind::InvalidAttributeForObjectType));
}

#[test]
fn test_json_report() {
    let builder = ObjectBuilder::mntner()
        .without("source")
        .replace("upd-to", "not-an-address");
    let index = builder.index_of("upd-to");
    let messages = apnic().validate(&builder.build());
    let json = serde_json::to_value(&messages).expect("serializes");

    assert_eq!(json["error_count"], 2);
    assert_eq!(json["object"][0]["kind"], "missing_mandatory_attribute");
    assert_eq!(json["object"][0]["attribute"], "source");
    assert_eq!(json["attributes"][0]["index"], index);
    assert_eq!(json["attributes"][0]["findings"][0]["kind"], "syntax_error");
    assert_eq!(
        json["attributes"][0]["findings"][0]["message"],
        "Syntax error in not-an-address"
    );
}
