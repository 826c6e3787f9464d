//! Reading RPSL text into objects.

use super::{apnic, apnic_objects};
use crate::assert_no_findings;
use rpsl_schema::{ObjectParseError, ObjectType, RpslAttribute, RpslObject, UnknownObjectType};

#[test]
fn test_parse_route_with_continuations() {
    let text = "\
route:          192.0.2.0/24
descr:          Example route
                spanning two lines
+               and a third
origin:         AS64500   # primary origin
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";
    let object = RpslObject::parse(text).expect("parses");
    assert_eq!(object.object_type(), ObjectType::Route);
    assert_eq!(object.key(), "192.0.2.0/24");
    assert_eq!(object.attributes().len(), 5);
    assert_eq!(
        object.attributes()[1].clean_value(),
        "Example route spanning two lines and a third"
    );
    assert_eq!(object.attributes()[2].clean_value(), "AS64500");
    assert_no_findings!(apnic().validate(&object));
}

#[test]
fn test_parse_skips_leading_comments_and_blank_lines() {
    let text = "% Information related to 'MAINT-EXAMPLE'\n\n# local note\nmntner: MAINT-EXAMPLE\n";
    let object = RpslObject::parse(text).expect("parses");
    assert_eq!(object.object_type(), ObjectType::Mntner);
    assert_eq!(object.attributes().len(), 1);
}

#[test]
fn test_parse_stops_at_blank_line() {
    let object = RpslObject::parse("mntner: MAINT-A\nsource: APNIC\n\nmntner: MAINT-B\n")
        .expect("parses");
    assert_eq!(object.key(), "MAINT-A");
    assert_eq!(object.attributes().len(), 2);
}

#[test]
fn test_parse_errors() {
    assert_eq!(RpslObject::parse(""), Err(ObjectParseError::Empty));
    assert_eq!(RpslObject::parse("% only a comment\n"), Err(ObjectParseError::Empty));
    assert_eq!(
        RpslObject::parse("  leading continuation\nmntner: X\n"),
        Err(ObjectParseError::DanglingContinuation { line: 1 })
    );
    assert!(matches!(
        RpslObject::parse("mntner: X\nno colon here\n"),
        Err(ObjectParseError::MalformedLine { line: 2, .. })
    ));
    assert_eq!(
        RpslObject::parse("widget: X\n"),
        Err(ObjectParseError::UnknownObjectType(UnknownObjectType(
            "widget".to_string()
        )))
    );
}

#[test]
fn test_parse_all() {
    let text = apnic_objects().join("\n");
    let objects: Vec<RpslObject> = RpslObject::parse_all(&text)
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("every fixture parses");
    assert_eq!(objects.len(), apnic_objects().len());
    for object in &objects {
        assert_no_findings!(apnic().validate(object));
    }
}

#[test]
fn test_parse_all_keeps_going_after_errors() {
    let text = "mntner: MAINT-A\n\nwidget: X\n\n\n\nperson: John Smith\n";
    let results = RpslObject::parse_all(text);
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert_eq!(
        results[2].as_ref().map(RpslObject::object_type),
        Ok(ObjectType::Person)
    );
}

#[test]
fn test_object_editing() {
    let mut object = RpslObject::from_pairs(
        ObjectType::Mntner,
        [("mntner", "MAINT-A"), ("remarks", "one"), ("remarks", "two")],
    );
    assert_eq!(object.find_attributes("REMARKS").count(), 2);
    assert_eq!(object.remove_all("remarks"), 2);
    object.push(RpslAttribute::new("source", "APNIC"));
    assert_eq!(object.attributes().len(), 2);
}

#[test]
fn test_display_round_trip() {
    let object = RpslObject::parse(crate::common::fixtures::AUT_NUM).expect("parses");
    let reparsed = RpslObject::parse(&object.to_string()).expect("reparses");
    assert_eq!(reparsed, object);
}
