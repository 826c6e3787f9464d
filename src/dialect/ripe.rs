//! RIPE dialect tables.
//!
//! RIPE drops `changed` in favour of the generated `created` and
//! `last-modified` pair, adds `sponsoring-org` to independent resources,
//! and declares a status vocabulary for aut-num as well.

use super::{
    DialectProvider, INVERSE, LOOKUP, LOOKUP_INVERSE, NONE, PRIMARY, attributes, build_templates,
    generated, mandatory, optional,
};
use crate::dialect::Dialect;
use crate::object::ObjectType;
use crate::schema::attribute::AttributeType;
use crate::schema::template::{AttributeTemplate, ObjectTemplate, Occurrence::*, Requirement};
use crate::syntax::{ContextualSyntax, StatusVocabulary, Syntax};

static STATUS_VOCABULARY: StatusVocabulary = StatusVocabulary {
    inetnum: &[
        "ALLOCATED PA",
        "ALLOCATED PI",
        "ALLOCATED UNSPECIFIED",
        "LIR-PARTITIONED PA",
        "LIR-PARTITIONED PI",
        "SUB-ALLOCATED PA",
        "ASSIGNED PA",
        "ASSIGNED PI",
        "ASSIGNED ANYCAST",
        "EARLY-REGISTRATION",
        "NOT-SET",
        "LEGACY",
    ],
    inet6num: &[
        "ALLOCATED-BY-RIR",
        "ALLOCATED-BY-LIR",
        "AGGREGATED-BY-LIR",
        "ASSIGNED",
        "ASSIGNED ANYCAST",
        "ASSIGNED PI",
    ],
    aut_num: &["ASSIGNED", "LEGACY", "OTHER"],
};

static STATUS: Syntax = Syntax::Contextual(ContextualSyntax::Status(&STATUS_VOCABULARY));

#[derive(Debug, Clone, Copy, Default)]
pub struct Ripe;

impl DialectProvider for Ripe {
    fn dialect(&self) -> Dialect {
        Dialect::Ripe
    }

    fn status_vocabulary(&self) -> &'static StatusVocabulary {
        &STATUS_VOCABULARY
    }

    fn attributes(&self) -> Vec<AttributeType> {
        attributes::table(&STATUS)
    }

    fn templates(&self) -> Vec<ObjectTemplate> {
        build_templates(TEMPLATES)
    }
}

const AS_BLOCK: &[AttributeTemplate] = &[
    mandatory("as-block", Single, PRIMARY),
    optional("descr", Multiple, NONE),
    optional("remarks", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    optional("admin-c", Multiple, INVERSE),
    optional("tech-c", Multiple, INVERSE),
    optional("notify", Multiple, INVERSE),
    optional("mnt-lower", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const AS_SET: &[AttributeTemplate] = &[
    mandatory("as-set", Single, PRIMARY),
    optional("descr", Multiple, NONE),
    optional("members", Multiple, NONE),
    optional("mbrs-by-ref", Multiple, INVERSE),
    optional("remarks", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    mandatory("tech-c", Multiple, INVERSE),
    mandatory("admin-c", Multiple, INVERSE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    optional("mnt-lower", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const AUT_NUM: &[AttributeTemplate] = &[
    mandatory("aut-num", Single, PRIMARY),
    mandatory("as-name", Single, LOOKUP),
    optional("descr", Multiple, NONE),
    optional("member-of", Multiple, INVERSE),
    optional("import-via", Multiple, NONE),
    optional("import", Multiple, NONE),
    optional("mp-import", Multiple, NONE),
    optional("export-via", Multiple, NONE),
    optional("export", Multiple, NONE),
    optional("mp-export", Multiple, NONE),
    optional("default", Multiple, NONE),
    optional("mp-default", Multiple, NONE),
    optional("remarks", Multiple, NONE),
    mandatory("org", Single, INVERSE),
    optional("sponsoring-org", Single, INVERSE),
    mandatory("admin-c", Multiple, INVERSE),
    mandatory("tech-c", Multiple, INVERSE),
    optional("abuse-c", Single, INVERSE),
    optional("status", Single, NONE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const DOMAIN: &[AttributeTemplate] = &[
    mandatory("domain", Single, PRIMARY),
    optional("descr", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    mandatory("admin-c", Multiple, INVERSE),
    mandatory("tech-c", Multiple, INVERSE),
    mandatory("zone-c", Multiple, INVERSE),
    mandatory("nserver", Multiple, INVERSE),
    optional("ds-rdata", Multiple, INVERSE),
    optional("remarks", Multiple, NONE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const FILTER_SET: &[AttributeTemplate] = &[
    mandatory("filter-set", Single, PRIMARY),
    optional("descr", Multiple, NONE),
    optional("filter", Single, NONE),
    optional("mp-filter", Single, NONE),
    optional("remarks", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    mandatory("tech-c", Multiple, INVERSE),
    mandatory("admin-c", Multiple, INVERSE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    optional("mnt-lower", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const INET6NUM: &[AttributeTemplate] = &[
    mandatory("inet6num", Single, PRIMARY),
    mandatory("netname", Single, LOOKUP),
    optional("descr", Multiple, NONE),
    mandatory("country", Multiple, NONE),
    optional("geoloc", Single, NONE),
    optional("language", Multiple, NONE),
    optional("org", Single, INVERSE),
    optional("sponsoring-org", Single, INVERSE),
    mandatory("admin-c", Multiple, INVERSE),
    mandatory("tech-c", Multiple, INVERSE),
    optional("abuse-c", Single, INVERSE),
    mandatory("status", Single, NONE),
    optional("assignment-size", Single, NONE),
    optional("remarks", Multiple, NONE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    optional("mnt-lower", Multiple, INVERSE),
    optional("mnt-routes", Multiple, INVERSE),
    optional("mnt-domains", Multiple, INVERSE),
    optional("mnt-irt", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const INET_RTR: &[AttributeTemplate] = &[
    mandatory("inet-rtr", Single, PRIMARY),
    optional("descr", Multiple, NONE),
    optional("alias", Multiple, NONE),
    mandatory("local-as", Single, INVERSE),
    mandatory("ifaddr", Multiple, LOOKUP),
    optional("interface", Multiple, LOOKUP),
    optional("peer", Multiple, NONE),
    optional("mp-peer", Multiple, NONE),
    optional("member-of", Multiple, INVERSE),
    optional("remarks", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    mandatory("admin-c", Multiple, INVERSE),
    mandatory("tech-c", Multiple, INVERSE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const INETNUM: &[AttributeTemplate] = &[
    mandatory("inetnum", Single, PRIMARY),
    mandatory("netname", Single, LOOKUP),
    optional("descr", Multiple, NONE),
    mandatory("country", Multiple, NONE),
    optional("geoloc", Single, NONE),
    optional("language", Multiple, NONE),
    optional("org", Single, INVERSE),
    optional("sponsoring-org", Single, INVERSE),
    mandatory("admin-c", Multiple, INVERSE),
    mandatory("tech-c", Multiple, INVERSE),
    optional("abuse-c", Single, INVERSE),
    mandatory("status", Single, NONE),
    optional("remarks", Multiple, NONE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    optional("mnt-lower", Multiple, INVERSE),
    optional("mnt-routes", Multiple, INVERSE),
    optional("mnt-domains", Multiple, INVERSE),
    optional("mnt-irt", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const IRT: &[AttributeTemplate] = &[
    mandatory("irt", Single, PRIMARY),
    mandatory("address", Multiple, NONE),
    optional("phone", Multiple, NONE),
    optional("fax-no", Multiple, NONE),
    mandatory("e-mail", Multiple, LOOKUP),
    mandatory("abuse-mailbox", Multiple, INVERSE),
    optional("signature", Multiple, NONE),
    optional("encryption", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    mandatory("admin-c", Multiple, INVERSE),
    mandatory("tech-c", Multiple, INVERSE),
    mandatory("auth", Multiple, INVERSE),
    optional("remarks", Multiple, NONE),
    optional("irt-nfy", Multiple, INVERSE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const KEY_CERT: &[AttributeTemplate] = &[
    mandatory("key-cert", Single, PRIMARY),
    generated("method"),
    AttributeTemplate::new("owner", Requirement::Generated, Multiple, NONE),
    AttributeTemplate::new("fingerpr", Requirement::Generated, Multiple, NONE),
    mandatory("certif", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    optional("remarks", Multiple, NONE),
    optional("admin-c", Multiple, INVERSE),
    optional("tech-c", Multiple, INVERSE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const MNTNER: &[AttributeTemplate] = &[
    mandatory("mntner", Single, PRIMARY),
    optional("descr", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    mandatory("admin-c", Multiple, INVERSE),
    optional("tech-c", Multiple, INVERSE),
    mandatory("upd-to", Multiple, INVERSE),
    optional("mnt-nfy", Multiple, INVERSE),
    mandatory("auth", Multiple, INVERSE),
    optional("remarks", Multiple, NONE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const ORGANISATION: &[AttributeTemplate] = &[
    mandatory("organisation", Single, PRIMARY),
    mandatory("org-name", Single, LOOKUP),
    mandatory("org-type", Single, NONE),
    optional("descr", Multiple, NONE),
    optional("remarks", Multiple, NONE),
    mandatory("address", Multiple, NONE),
    optional("country", Single, NONE),
    optional("phone", Multiple, NONE),
    optional("fax-no", Multiple, NONE),
    mandatory("e-mail", Multiple, LOOKUP),
    optional("geoloc", Single, NONE),
    optional("language", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    optional("admin-c", Multiple, INVERSE),
    optional("tech-c", Multiple, INVERSE),
    optional("abuse-c", Single, INVERSE),
    optional("ref-nfy", Multiple, INVERSE),
    mandatory("mnt-ref", Multiple, INVERSE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const PEERING_SET: &[AttributeTemplate] = &[
    mandatory("peering-set", Single, PRIMARY),
    optional("descr", Multiple, NONE),
    optional("peering", Multiple, NONE),
    optional("mp-peering", Multiple, NONE),
    optional("remarks", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    mandatory("tech-c", Multiple, INVERSE),
    mandatory("admin-c", Multiple, INVERSE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    optional("mnt-lower", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const PERSON: &[AttributeTemplate] = &[
    mandatory("person", Single, PRIMARY),
    mandatory("address", Multiple, NONE),
    mandatory("phone", Multiple, NONE),
    optional("fax-no", Multiple, NONE),
    optional("e-mail", Multiple, LOOKUP),
    optional("org", Multiple, INVERSE),
    mandatory("nic-hdl", Single, LOOKUP),
    optional("remarks", Multiple, NONE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const POEM: &[AttributeTemplate] = &[
    mandatory("poem", Single, PRIMARY),
    optional("descr", Multiple, NONE),
    mandatory("form", Single, INVERSE),
    mandatory("text", Multiple, NONE),
    optional("author", Multiple, INVERSE),
    optional("remarks", Multiple, NONE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Single, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const POETIC_FORM: &[AttributeTemplate] = &[
    mandatory("poetic-form", Single, PRIMARY),
    optional("descr", Multiple, NONE),
    mandatory("admin-c", Multiple, INVERSE),
    optional("remarks", Multiple, NONE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const ROLE: &[AttributeTemplate] = &[
    mandatory("role", Single, PRIMARY),
    mandatory("address", Multiple, NONE),
    optional("phone", Multiple, NONE),
    optional("fax-no", Multiple, NONE),
    mandatory("e-mail", Multiple, LOOKUP),
    optional("org", Multiple, INVERSE),
    optional("admin-c", Multiple, INVERSE),
    optional("tech-c", Multiple, INVERSE),
    mandatory("nic-hdl", Single, LOOKUP),
    optional("remarks", Multiple, NONE),
    optional("notify", Multiple, INVERSE),
    optional("abuse-mailbox", Single, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const ROUTE: &[AttributeTemplate] = &[
    mandatory("route", Single, PRIMARY),
    optional("descr", Multiple, NONE),
    mandatory("origin", Single, LOOKUP_INVERSE),
    optional("pingable", Multiple, NONE),
    optional("ping-hdl", Multiple, INVERSE),
    optional("holes", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    optional("member-of", Multiple, INVERSE),
    optional("inject", Multiple, NONE),
    optional("aggr-mtd", Single, NONE),
    optional("aggr-bndry", Single, NONE),
    optional("export-comps", Single, NONE),
    optional("components", Single, NONE),
    optional("remarks", Multiple, NONE),
    optional("notify", Multiple, INVERSE),
    optional("mnt-lower", Multiple, INVERSE),
    optional("mnt-routes", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const ROUTE6: &[AttributeTemplate] = &[
    mandatory("route6", Single, PRIMARY),
    optional("descr", Multiple, NONE),
    mandatory("origin", Single, LOOKUP_INVERSE),
    optional("pingable", Multiple, NONE),
    optional("ping-hdl", Multiple, INVERSE),
    optional("holes", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    optional("member-of", Multiple, INVERSE),
    optional("inject", Multiple, NONE),
    optional("aggr-mtd", Single, NONE),
    optional("aggr-bndry", Single, NONE),
    optional("export-comps", Single, NONE),
    optional("components", Single, NONE),
    optional("remarks", Multiple, NONE),
    optional("notify", Multiple, INVERSE),
    optional("mnt-lower", Multiple, INVERSE),
    optional("mnt-routes", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const ROUTE_SET: &[AttributeTemplate] = &[
    mandatory("route-set", Single, PRIMARY),
    optional("descr", Multiple, NONE),
    optional("members", Multiple, NONE),
    optional("mp-members", Multiple, NONE),
    optional("mbrs-by-ref", Multiple, INVERSE),
    optional("remarks", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    mandatory("tech-c", Multiple, INVERSE),
    mandatory("admin-c", Multiple, INVERSE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    optional("mnt-lower", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const RTR_SET: &[AttributeTemplate] = &[
    mandatory("rtr-set", Single, PRIMARY),
    optional("descr", Multiple, NONE),
    optional("members", Multiple, NONE),
    optional("mp-members", Multiple, NONE),
    optional("mbrs-by-ref", Multiple, INVERSE),
    optional("remarks", Multiple, NONE),
    optional("org", Multiple, INVERSE),
    mandatory("tech-c", Multiple, INVERSE),
    mandatory("admin-c", Multiple, INVERSE),
    optional("notify", Multiple, INVERSE),
    mandatory("mnt-by", Multiple, INVERSE),
    optional("mnt-lower", Multiple, INVERSE),
    generated("created"),
    generated("last-modified"),
    mandatory("source", Single, NONE),
];

const TEMPLATES: &[(ObjectType, &[AttributeTemplate])] = &[
    (ObjectType::AsBlock, AS_BLOCK),
    (ObjectType::AsSet, AS_SET),
    (ObjectType::AutNum, AUT_NUM),
    (ObjectType::Domain, DOMAIN),
    (ObjectType::FilterSet, FILTER_SET),
    (ObjectType::Inet6num, INET6NUM),
    (ObjectType::InetRtr, INET_RTR),
    (ObjectType::Inetnum, INETNUM),
    (ObjectType::Irt, IRT),
    (ObjectType::KeyCert, KEY_CERT),
    (ObjectType::Mntner, MNTNER),
    (ObjectType::Organisation, ORGANISATION),
    (ObjectType::PeeringSet, PEERING_SET),
    (ObjectType::Person, PERSON),
    (ObjectType::Poem, POEM),
    (ObjectType::PoeticForm, POETIC_FORM),
    (ObjectType::Role, ROLE),
    (ObjectType::Route, ROUTE),
    (ObjectType::Route6, ROUTE6),
    (ObjectType::RouteSet, ROUTE_SET),
    (ObjectType::RtrSet, RTR_SET),
];
