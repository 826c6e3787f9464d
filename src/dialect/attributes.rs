//! The attribute table shared by both dialects.
//!
//! Dialects differ in their status vocabularies, which arrive here as the
//! `status` syntax, and in which attributes their templates use.

use crate::documentation::Documentation;
use crate::object::ObjectType;
use crate::schema::attribute::{AttributeType, Cardinality};
use crate::syntax::contextual::ContextualSyntax;
use crate::syntax::grammars::*;
use crate::syntax::patterns::*;
use crate::syntax::Syntax;
use Cardinality::{List, Single};

const CONTACTS: &[ObjectType] = &[ObjectType::Person, ObjectType::Role];
const ROLES: &[ObjectType] = &[ObjectType::Role];
const MNTNER: &[ObjectType] = &[ObjectType::Mntner];
const ORGANISATION: &[ObjectType] = &[ObjectType::Organisation];
const IRT: &[ObjectType] = &[ObjectType::Irt];
const KEY_CERT: &[ObjectType] = &[ObjectType::KeyCert];
const AUT_NUM: &[ObjectType] = &[ObjectType::AutNum];
const POETIC_FORM: &[ObjectType] = &[ObjectType::PoeticForm];
const SETS: &[ObjectType] = &[ObjectType::AsSet, ObjectType::RouteSet, ObjectType::RtrSet];
const MEMBERS: &[ObjectType] = &[
    ObjectType::AutNum,
    ObjectType::AsSet,
    ObjectType::RouteSet,
    ObjectType::InetRtr,
    ObjectType::RtrSet,
];
const NOTHING: &[ObjectType] = &[];

static ANY: Syntax = Syntax::Any;
static MEMBERS_SYNTAX: Syntax = Syntax::Contextual(ContextualSyntax::Members {
    multiprotocol: false,
});
static MP_MEMBERS_SYNTAX: Syntax = Syntax::Contextual(ContextualSyntax::Members {
    multiprotocol: true,
});
static MEMBER_OF: Syntax = Syntax::Contextual(ContextualSyntax::MemberOf);
static HOLES: Syntax = Syntax::Contextual(ContextualSyntax::Holes);
static PINGABLE: Syntax = Syntax::Contextual(ContextualSyntax::Pingable);
static COMPONENTS: Syntax = Syntax::Contextual(ContextualSyntax::Components);
static EXPORT_COMPS: Syntax = Syntax::Contextual(ContextualSyntax::ExportComps);
static INJECT: Syntax = Syntax::Contextual(ContextualSyntax::Inject);

fn attribute(
    name: &'static str,
    flag: &'static str,
    syntax: &'static Syntax,
    cardinality: Cardinality,
    references: &'static [ObjectType],
    documentation: &'static str,
) -> AttributeType {
    AttributeType {
        name,
        flag,
        syntax,
        cardinality,
        references,
        documentation: Documentation::Single(documentation),
    }
}

fn per_type(
    name: &'static str,
    flag: &'static str,
    syntax: &'static Syntax,
    cardinality: Cardinality,
    references: &'static [ObjectType],
    documentation: &'static [(ObjectType, &'static str)],
) -> AttributeType {
    AttributeType {
        name,
        flag,
        syntax,
        cardinality,
        references,
        documentation: Documentation::PerObjectType(documentation),
    }
}

/// Build the attribute table around a dialect's `status` syntax.
#[rustfmt::skip]
pub(crate) fn table(status: &'static Syntax) -> Vec<AttributeType> {
    vec![
        attribute("abuse-c", "au", &NIC_HANDLE, Single, ROLES,
            "Contact for reports of network abuse, a role object with an abuse-mailbox."),
        attribute("abuse-mailbox", "am", &EMAIL, Single, NOTHING,
            "Specifies the e-mail address to which abuse complaints should be sent."),
        attribute("address", "ad", &ANY, Single, NOTHING,
            "Full postal address of a contact."),
        attribute("admin-c", "ac", &NIC_HANDLE, Single, CONTACTS,
            "The NIC-handle of an on-site contact person or role."),
        attribute("aggr-bndry", "ab", &AS_EXPRESSION, Single, NOTHING,
            "Defines a set of ASes, which form the aggregation boundary."),
        attribute("aggr-mtd", "ag", &AGGR_MTD, Single, NOTHING,
            "Specifies how the aggregate is generated."),
        attribute("alias", "az", &ROUTER_NAME, Single, NOTHING,
            "The canonical DNS name for the router."),
        attribute("as-block", "ak", &AS_BLOCK, Single, NOTHING,
            "The range of AS numbers that this object represents."),
        attribute("as-name", "aa", &AS_NAME, Single, NOTHING,
            "A descriptive name associated with an AS."),
        attribute("as-set", "as", &AS_SET_NAME, Single, NOTHING,
            "Defines the name of the set."),
        attribute("assignment-size", "ae", &ASSIGNMENT_SIZE, Single, NOTHING,
            "Specifies the size of blocks assigned to end users from this aggregated inet6num."),
        attribute("auth", "at", &AUTH_SCHEME, Single, KEY_CERT,
            "Defines an authentication scheme to be used."),
        attribute("author", "ah", &NIC_HANDLE, Single, CONTACTS,
            "References a poem author."),
        attribute("aut-num", "an", &AS_NUMBER, Single, NOTHING,
            "The autonomous system number."),
        attribute("certif", "ce", &ANY, Single, NOTHING,
            "Contains the public key."),
        attribute("changed", "ch", &CHANGED, Single, NOTHING,
            "Specifies who submitted the update, and when the object was updated."),
        per_type("components", "co", &COMPONENTS, Single, NOTHING, &[
            (ObjectType::Route, "The component routes of an aggregate IPv4 route."),
            (ObjectType::Route6, "The component routes of an aggregate IPv6 route."),
        ]),
        attribute("country", "cy", &COUNTRY_CODE, Single, NOTHING,
            "Identifies the country."),
        attribute("created", "cr", &TIMESTAMP, Single, NOTHING,
            "Time the object was created."),
        attribute("default", "df", &DEFAULT, Single, NOTHING,
            "Specifies default routing policies."),
        attribute("descr", "de", &ANY, Single, NOTHING,
            "A short description related to the object."),
        attribute("domain", "dn", &REVERSE_DOMAIN, Single, NOTHING,
            "Domain name."),
        attribute("ds-rdata", "ds", &DS_RDATA, Single, NOTHING,
            "DS record for this domain."),
        attribute("e-mail", "em", &EMAIL, Single, NOTHING,
            "The e-mail address of a person, role, organisation or irt team."),
        attribute("encryption", "en", &KEY_CERT_ID, Single, KEY_CERT,
            "References a key-cert object representing a CSIRT public key used to encrypt \
             correspondence sent to the CSIRT."),
        attribute("export", "ex", &EXPORT, Single, NOTHING,
            "Specifies an export policy expression."),
        per_type("export-comps", "ec", &EXPORT_COMPS, Single, NOTHING, &[
            (ObjectType::Route, "Defines the set's policy filter, a logical expression which \
                when applied to a set of routes returns a subset of these routes."),
            (ObjectType::Route6, "Defines the set's policy filter, a logical expression which \
                when applied to a set of routes returns a subset of these routes."),
        ]),
        attribute("export-via", "ev", &EXPORT_VIA, Single, NOTHING,
            "Specifies an export policy expression targeted at a non-adjacent network."),
        attribute("fax-no", "fx", &PHONE_NUMBER, Single, NOTHING,
            "The fax number of a contact."),
        attribute("filter", "fi", &FILTER, Single, NOTHING,
            "Defines the set's policy filter."),
        attribute("filter-set", "fs", &FILTER_SET_NAME, Single, NOTHING,
            "Defines the name of the filter."),
        attribute("fingerpr", "fp", &ANY, Single, NOTHING,
            "A fingerprint of a key certificate generated by the database."),
        attribute("form", "fr", &POETIC_FORM_NAME, Single, POETIC_FORM,
            "Specifies the identifier of a registered poem type."),
        attribute("geoloc", "gl", &GEOLOC, Single, NOTHING,
            "The location coordinates for the resource."),
        per_type("holes", "ho", &HOLES, List, NOTHING, &[
            (ObjectType::Route, "Lists the component address prefixes that are not reachable \
                through the aggregate route."),
            (ObjectType::Route6, "Lists the component address prefixes that are not reachable \
                through the aggregate route."),
        ]),
        attribute("ifaddr", "if", &IFADDR, Single, NOTHING,
            "Specifies an interface address within an Internet router."),
        attribute("import", "ip", &IMPORT, Single, NOTHING,
            "Specifies import policy expression."),
        attribute("import-via", "iv", &IMPORT_VIA, Single, NOTHING,
            "Specifies an import policy expression targeted at a non-adjacent network."),
        attribute("inet-rtr", "ir", &ROUTER_NAME, Single, NOTHING,
            "Fully qualified DNS name of the inet-rtr without trailing \".\"."),
        attribute("inet6num", "i6", &IPV6_PREFIX, Single, NOTHING,
            "Specifies a range of IPv6 addresses in prefix notation."),
        attribute("inetnum", "in", &IPV4_RANGE, Single, NOTHING,
            "Specifies a range of IPv4 that inetnum object presents. The ending address \
             should be greater than the starting one."),
        per_type("inject", "ij", &INJECT, Single, NOTHING, &[
            (ObjectType::Route, "Specifies which routers perform the aggregation and when \
                they perform it."),
            (ObjectType::Route6, "Specifies which routers perform the aggregation and when \
                they perform it."),
        ]),
        attribute("interface", "ie", &INTERFACE, Single, NOTHING,
            "Specifies a multiprotocol interface address within an Internet router."),
        attribute("irt", "it", &IRT_NAME, Single, NOTHING,
            "Specifies the name of the irt object."),
        attribute("irt-nfy", "iy", &EMAIL, Single, NOTHING,
            "Specifies the e-mail address to be notified when a reference to the irt \
             object is added or removed."),
        attribute("key-cert", "kc", &KEY_CERT_ID, Single, NOTHING,
            "Defines the public key stored in the database."),
        attribute("language", "ln", &LANGUAGE_CODE, Single, NOTHING,
            "Identifies the language."),
        attribute("last-modified", "lm", &TIMESTAMP, Single, NOTHING,
            "Time the object was last modified."),
        attribute("local-as", "la", &AS_NUMBER, Single, AUT_NUM,
            "Specifies the autonomous system that operates the router."),
        attribute("mbrs-by-ref", "mr", &MBRS_BY_REF, List, MNTNER,
            "This attribute can be used in all \"set\" objects; it allows indirect \
             population of a set."),
        per_type("member-of", "mo", &MEMBER_OF, List, SETS, &[
            (ObjectType::AutNum, "This attribute can be used in the aut-num object to \
                identify an as-set it wants to be a member of."),
            (ObjectType::Route, "This attribute can be used in the route object to \
                identify a route-set it wants to be a member of."),
            (ObjectType::Route6, "This attribute can be used in the route6 object to \
                identify a route-set it wants to be a member of."),
            (ObjectType::InetRtr, "This attribute can be used in the inet-rtr object to \
                identify an rtr-set it wants to be a member of."),
        ]),
        per_type("members", "ms", &MEMBERS_SYNTAX, List, MEMBERS, &[
            (ObjectType::AsSet, "Lists the members of the set: AS numbers or other as-sets."),
            (ObjectType::RouteSet, "Lists the members of the set: IPv4 address prefix \
                ranges or other route-sets."),
            (ObjectType::RtrSet, "Lists the members of the set: inet-rtr names, IPv4 \
                addresses or other rtr-sets."),
        ]),
        attribute("method", "mh", &KEY_METHOD, Single, NOTHING,
            "Defines the type of the public key."),
        attribute("mnt-by", "mb", &MNTNER_NAME, List, MNTNER,
            "Specifies the identifier of a registered mntner object used for authorisation \
             and authentication."),
        attribute("mnt-domains", "md", &MNTNER_NAME, List, MNTNER,
            "Specifies the identifier of a registered mntner object used for reverse domain \
             authorisation."),
        attribute("mnt-irt", "mi", &IRT_NAME, List, IRT,
            "May contain an irt object name, the CSIRT responsible for the resource."),
        attribute("mnt-lower", "ml", &MNTNER_NAME, List, MNTNER,
            "Specifies the identifier of a registered mntner object used for hierarchical \
             authorisation."),
        attribute("mnt-nfy", "mn", &EMAIL, Single, NOTHING,
            "Specifies the e-mail address to be notified when an object protected by a \
             mntner is successfully updated."),
        attribute("mnt-ref", "mz", &MNTNER_NAME, List, MNTNER,
            "Specifies the maintainer objects that are entitled to add references to the \
             organisation object from other objects."),
        attribute("mnt-routes", "mu", &MNT_ROUTES, Single, MNTNER,
            "This attribute references a maintainer object which is used in determining \
             authorisation for the creation of route objects."),
        attribute("mntner", "mt", &MNTNER_NAME, Single, NOTHING,
            "A unique identifier of the mntner object."),
        attribute("mp-default", "ma", &MP_DEFAULT, Single, NOTHING,
            "Specifies default multiprotocol routing policies."),
        attribute("mp-export", "me", &MP_EXPORT, Single, NOTHING,
            "Specifies a multiprotocol export policy expression."),
        attribute("mp-filter", "mf", &MP_FILTER, Single, NOTHING,
            "Defines the set's multiprotocol policy filter."),
        attribute("mp-import", "mj", &MP_IMPORT, Single, NOTHING,
            "Specifies multiprotocol import policy expression."),
        per_type("mp-members", "mm", &MP_MEMBERS_SYNTAX, List, MEMBERS, &[
            (ObjectType::RouteSet, "Lists the multiprotocol members of the set: IPv4 or \
                IPv6 address prefix ranges or other route-sets."),
            (ObjectType::RtrSet, "Lists the multiprotocol members of the set: inet-rtr \
                names, IPv4 or IPv6 addresses or other rtr-sets."),
        ]),
        attribute("mp-peer", "mp", &MP_PEER, Single, NOTHING,
            "Details of any (interior or exterior) multiprotocol router peerings."),
        attribute("mp-peering", "mg", &MP_PEERING, Single, NOTHING,
            "Defines a multiprotocol peering that can be used for importing or exporting \
             routes."),
        attribute("netname", "na", &NETNAME, Single, NOTHING,
            "The name of a range of IP address space."),
        attribute("nic-hdl", "nh", &NIC_HANDLE, Single, NOTHING,
            "Specifies the NIC handle of a role or person object."),
        attribute("notify", "ny", &EMAIL, Single, NOTHING,
            "Specifies the e-mail address to which notifications of changes to an object \
             should be sent."),
        attribute("nserver", "ns", &NSERVER, Single, NOTHING,
            "Specifies the nameservers of the domain."),
        attribute("org", "og", &ORGANISATION_ID, Single, ORGANISATION,
            "Points to an existing organisation object representing the entity that holds \
             the resource."),
        attribute("org-name", "on", &ORG_NAME, Single, NOTHING,
            "Specifies the name of the organisation that this organisation object represents."),
        attribute("org-type", "ot", &ORG_TYPE, Single, NOTHING,
            "Specifies the type of the organisation."),
        attribute("organisation", "oa", &ORGANISATION_ID, Single, NOTHING,
            "Specifies the ID of an organisation object."),
        attribute("origin", "or", &AS_NUMBER, Single, AUT_NUM,
            "Specifies the AS that originates the route. The corresponding aut-num object \
             should be registered in the database."),
        attribute("owner", "ow", &ANY, Single, NOTHING,
            "Specifies the owner of the public key."),
        attribute("peer", "pe", &PEER, Single, NOTHING,
            "Details of any (interior or exterior) router peerings."),
        attribute("peering", "pg", &PEERING, Single, NOTHING,
            "Defines a peering that can be used for importing or exporting routes."),
        attribute("peering-set", "ps", &PEERING_SET_NAME, Single, NOTHING,
            "Specifies the name of the peering-set."),
        attribute("person", "pn", &PERSON_NAME, Single, NOTHING,
            "Specifies the full name of an administrative, technical or zone contact person \
             for other objects in the database."),
        attribute("phone", "ph", &PHONE_NUMBER, Single, NOTHING,
            "Specifies a telephone number of the contact."),
        attribute("ping-hdl", "pc", &NIC_HANDLE, Single, CONTACTS,
            "References a person or role capable of responding to queries concerning the \
             pingable address."),
        per_type("pingable", "pa", &PINGABLE, Single, NOTHING, &[
            (ObjectType::Route, "Allows a network operator to advertise an IPv4 address of \
                a node that should be reachable from outside networks."),
            (ObjectType::Route6, "Allows a network operator to advertise an IPv6 address of \
                a node that should be reachable from outside networks."),
        ]),
        attribute("poem", "po", &POEM_NAME, Single, NOTHING,
            "Specifies the title of the poem."),
        attribute("poetic-form", "pf", &POETIC_FORM_NAME, Single, NOTHING,
            "Specifies the poem type."),
        attribute("ref-nfy", "rn", &EMAIL, Single, NOTHING,
            "Specifies the e-mail address to be notified when a reference to the \
             organisation object is added or removed."),
        attribute("referral-by", "rb", &MNTNER_NAME, Single, MNTNER,
            "This attribute is required in the maintainer object. It may never be altered \
             after the addition of the maintainer."),
        attribute("remarks", "rm", &ANY, Single, NOTHING,
            "Contains remarks."),
        attribute("role", "ro", &PERSON_NAME, Single, NOTHING,
            "Specifies the full name of a role entity, e.g. RIPE DBM."),
        attribute("route", "rt", &IPV4_PREFIX, Single, NOTHING,
            "Specifies the prefix of the interAS route."),
        attribute("route-set", "rs", &ROUTE_SET_NAME, Single, NOTHING,
            "Specifies the name of the route set."),
        attribute("route6", "r6", &IPV6_PREFIX, Single, NOTHING,
            "Specifies the IPv6 prefix of the interAS route."),
        attribute("rtr-set", "is", &RTR_SET_NAME, Single, NOTHING,
            "Defines the name of the rtr-set."),
        attribute("signature", "sg", &KEY_CERT_ID, Single, KEY_CERT,
            "References a key-cert object representing a CSIRT public key used by the team \
             to sign their correspondence."),
        attribute("source", "so", &SOURCE, Single, NOTHING,
            "Specifies the registry where the object is registered."),
        attribute("sponsoring-org", "sp", &ORGANISATION_ID, Single, ORGANISATION,
            "Points to an existing organisation object representing the sponsoring \
             organisation responsible for the resource."),
        per_type("status", "st", status, Single, NOTHING, &[
            (ObjectType::Inetnum, "Specifies the status of the address range represented \
                by the inetnum object."),
            (ObjectType::Inet6num, "Specifies the status of the address range represented \
                by the inet6num object."),
            (ObjectType::AutNum, "Specifies the status of the AS number."),
        ]),
        attribute("tech-c", "tc", &NIC_HANDLE, Single, CONTACTS,
            "The NIC-handle of a technical contact person or role."),
        attribute("text", "tx", &ANY, Single, NOTHING,
            "Text of the poem. Must be humorous, but not malicious or insulting."),
        attribute("upd-to", "dt", &EMAIL, Single, NOTHING,
            "Specifies the e-mail address to be notified when an attempt to update an \
             object protected by this mntner is unsuccessful."),
        attribute("zone-c", "zc", &NIC_HANDLE, Single, CONTACTS,
            "The NIC-handle of a zone contact person or role."),
    ]
}
