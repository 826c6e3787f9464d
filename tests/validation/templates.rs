//! Template shape, rendering and the differences between dialects.

use super::{apnic, ripe};
use rpsl_schema::{KeyRole, ObjectType, Occurrence, Requirement};

#[test]
fn test_every_object_type_has_a_template() {
    for catalog in [apnic(), ripe()] {
        assert_eq!(catalog.templates().count(), ObjectType::ALL.len());
        for object_type in ObjectType::ALL {
            let template = catalog.template_for(object_type);
            assert_eq!(template.object_type(), object_type);
            let class = template.class_attribute().expect("class attribute");
            assert_eq!(class.attribute, object_type.name());
            assert_eq!(class.requirement, Requirement::Mandatory);
            assert_eq!(class.occurrence, Occurrence::Single);
            assert!(class.has_key(KeyRole::PrimaryKey));
        }
    }
}

#[test]
fn test_every_template_ends_with_source() {
    for catalog in [apnic(), ripe()] {
        for template in catalog.templates() {
            let last = template.entries().last().expect("non-empty template");
            assert_eq!(last.attribute, "source", "{}", template.object_type());
            assert_eq!(last.requirement, Requirement::Mandatory);
            assert!(template.mandatory_attributes().contains("mnt-by"));
        }
    }
}

#[test]
fn test_key_sets() {
    let route = apnic().template_for(ObjectType::Route);
    assert_eq!(route.key_attributes().iter().copied().collect::<Vec<_>>(), vec!["route"]);
    assert!(route.lookup_attributes().contains("origin"));
    assert!(route.inverse_lookup_attributes().contains("origin"));
    assert!(route.inverse_lookup_attributes().contains("mnt-by"));
    assert!(!route.mandatory_attributes().contains("holes"));

    let person = apnic().template_for(ObjectType::Person);
    assert!(person.key_attributes().contains("person"));
    assert!(!person.key_attributes().contains("nic-hdl"));
    assert!(person.lookup_attributes().contains("nic-hdl"));
}

#[test]
fn test_render_layout() {
    let rendered = apnic().template_for(ObjectType::Route).render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), apnic().template_for(ObjectType::Route).entries().len());
    assert!(lines[0].starts_with("route:"));
    assert!(lines[0].ends_with("[primary/lookup key]"));
    let origin = lines
        .iter()
        .find(|line| line.starts_with("origin:"))
        .expect("origin line");
    assert!(origin.contains("[mandatory]"));
    assert!(origin.contains("[single]"));
    assert!(origin.ends_with("[lookup key, inverse key]"));
    let modified = lines
        .iter()
        .find(|line| line.starts_with("last-modified:"))
        .expect("last-modified line");
    assert!(modified.contains("[generated]"));
}

#[test]
fn test_describe_template() {
    let text = apnic().describe_template(ObjectType::AutNum);
    assert!(text.starts_with("% The aut-num class:\n\n"));
    assert!(text.contains("% The content of the attributes of the aut-num class are:"));
    assert!(text.contains("\nimport\n"));
    assert!(text.contains("accept <filter>"));
    assert!(text.contains("\nmp-import\n"));
}

#[test]
fn test_describe_uses_per_type_documentation() {
    let as_set = apnic().describe("members", ObjectType::AsSet).expect("members");
    let route_set = apnic().describe("members", ObjectType::RouteSet).expect("members");
    assert_ne!(as_set, route_set);
    assert!(as_set.contains("AS numbers"));
    assert!(apnic().describe("nope", ObjectType::AsSet).is_err());
}

#[test]
fn test_changed_and_created_by_dialect() {
    for template in apnic().templates() {
        let changed = template.entry("changed").expect("changed on every APNIC template");
        assert_eq!(changed.requirement, Requirement::Optional);
        assert_eq!(changed.occurrence, Occurrence::Multiple);
        assert!(template.entry("created").is_none());
    }
    for template in ripe().templates() {
        assert!(template.entry("changed").is_none());
        let created = template.entry("created").expect("created on every RIPE template");
        assert_eq!(created.requirement, Requirement::Generated);
        assert_eq!(
            template.entry("last-modified").map(|entry| entry.requirement),
            Some(Requirement::Generated)
        );
    }
}

#[test]
fn test_resource_requirements_by_dialect() {
    for object_type in [ObjectType::Inetnum, ObjectType::Inet6num] {
        let apnic_template = apnic().template_for(object_type);
        let ripe_template = ripe().template_for(object_type);
        assert!(apnic_template.mandatory_attributes().contains("country"));
        assert!(apnic_template.mandatory_attributes().contains("mnt-irt"));
        assert!(!ripe_template.mandatory_attributes().contains("mnt-irt"));
        assert!(apnic_template.entry("sponsoring-org").is_none());
        assert!(ripe_template.entry("sponsoring-org").is_some());
    }
    assert!(ripe().template_for(ObjectType::Inet6num).entry("assignment-size").is_some());
}

#[test]
fn test_contact_requirements_by_dialect() {
    let apnic_person = apnic().template_for(ObjectType::Person);
    let ripe_person = ripe().template_for(ObjectType::Person);
    assert!(apnic_person.mandatory_attributes().contains("e-mail"));
    assert!(!ripe_person.mandatory_attributes().contains("e-mail"));
    assert!(ripe_person.entry("country").is_none());

    let organisation = ripe().template_for(ObjectType::Organisation);
    assert!(organisation.mandatory_attributes().contains("org-type"));
}

#[test]
fn test_aut_num_by_dialect() {
    let ripe_aut_num = ripe().template_for(ObjectType::AutNum);
    assert!(ripe_aut_num.mandatory_attributes().contains("org"));
    assert!(ripe_aut_num.entry("import-via").is_some());
    assert!(ripe_aut_num.entry("export-via").is_some());
    assert_eq!(
        ripe_aut_num.entry("status").map(|entry| entry.requirement),
        Some(Requirement::Optional)
    );
    assert!(ripe().is_valid(ObjectType::AutNum, "status", "ASSIGNED").expect("status"));
    assert!(!apnic().is_valid(ObjectType::AutNum, "status", "ASSIGNED").expect("status"));
}

#[test]
fn test_status_vocabularies_differ() {
    assert!(ripe().is_valid(ObjectType::Inetnum, "status", "ALLOCATED PA").expect("status"));
    assert!(!ripe().is_valid(ObjectType::Inetnum, "status", "ALLOCATED PORTABLE").expect("status"));
    assert!(ripe().is_valid(ObjectType::Inet6num, "status", "AGGREGATED-BY-LIR").expect("status"));
    assert!(!apnic().is_valid(ObjectType::Inet6num, "status", "AGGREGATED-BY-LIR").expect("status"));
}
