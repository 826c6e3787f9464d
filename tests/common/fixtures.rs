//! Well-formed example objects.
//!
//! Every APNIC fixture validates with no findings against the APNIC catalog,
//! and every RIPE fixture against the RIPE catalog. Tests derive invalid
//! objects from these by adding, removing or replacing attributes.

pub const MNTNER: &str = "\
mntner:         MAINT-EXAMPLE
descr:          Example maintainer
admin-c:        EX1-AP
tech-c:         EX1-AP
upd-to:         hostmaster@example.net
mnt-nfy:        hostmaster@example.net
auth:           MD5-PW $1$abcdefgh$abcdefghijklmnopqrstuv
auth:           PGPKEY-1A2B3C4D
mnt-by:         MAINT-EXAMPLE
changed:        hostmaster@example.net 20240131
source:         APNIC
";

pub const PERSON: &str = "\
person:         John Smith
address:        1 Example Street
address:        Brisbane QLD 4000
country:        AU
phone:          +61 7 3858 3100
fax-no:         +61 7 3858 3199
e-mail:         john@example.net
nic-hdl:        EX1-AP
mnt-by:         MAINT-EXAMPLE
changed:        john@example.net 20240131
source:         APNIC
";

pub const ROLE: &str = "\
role:           Example NOC
address:        1 Example Street
country:        AU
phone:          +61 7 3858 3100
e-mail:         noc@example.net
admin-c:        EX1-AP
tech-c:         EX1-AP
nic-hdl:        EN1-AP
abuse-mailbox:  abuse@example.net
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const INETNUM: &str = "\
inetnum:        192.0.2.0 - 192.0.2.255
netname:        EXAMPLE-NET
descr:          Example network
country:        AU
geoloc:         -27.4698 153.0251
language:       EN
org:            ORG-EA1-AP
admin-c:        EX1-AP
tech-c:         EX1-AP
abuse-c:        EN1-AP
status:         ASSIGNED PORTABLE
mnt-by:         MAINT-EXAMPLE
mnt-lower:      MAINT-EXAMPLE
mnt-irt:        IRT-EXAMPLE
last-modified:  2024-01-31T09:00:00Z
source:         APNIC
";

pub const INET6NUM: &str = "\
inet6num:       2001:db8::/32
netname:        EXAMPLE-NET6
descr:          Example IPv6 network
country:        AU
admin-c:        EX1-AP
tech-c:         EX1-AP
status:         ALLOCATED-BY-RIR
mnt-by:         MAINT-EXAMPLE
mnt-irt:        IRT-EXAMPLE
source:         APNIC
";

pub const AUT_NUM: &str = "\
aut-num:        AS64500
as-name:        EXAMPLE-AS
descr:          Example autonomous system
country:        AU
member-of:      AS-EXAMPLE
import:         from AS64501 action pref=100; accept ANY
mp-import:      afi ipv6.unicast from AS64501 accept { 2001:db8::/32^48 }
export:         to AS64501 announce AS-EXAMPLE
default:        to AS64501 action pref=100; networks ANY
admin-c:        EX1-AP
tech-c:         EX1-AP
mnt-by:         MAINT-EXAMPLE
mnt-routes:     MAINT-EXAMPLE { 192.0.2.0/24^+ }
mnt-irt:        IRT-EXAMPLE
changed:        hostmaster@example.net 20240131
source:         APNIC
";

pub const AS_BLOCK: &str = "\
as-block:       AS64496 - AS64511
descr:          Documentation ASNs
admin-c:        EX1-AP
tech-c:         EX1-AP
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const AS_SET: &str = "\
as-set:         AS-EXAMPLE
descr:          Example customers
members:        AS64500, AS64501, AS-CUSTOMERS
mbrs-by-ref:    MAINT-EXAMPLE
tech-c:         EX1-AP
admin-c:        EX1-AP
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const ROUTE_SET: &str = "\
route-set:      RS-EXAMPLE
descr:          Example routes
members:        195.66.224.0/23, RS-PEERS^+, AS64500^-
mp-members:     2001:db8::/32^48
tech-c:         EX1-AP
admin-c:        EX1-AP
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const RTR_SET: &str = "\
rtr-set:        RTRS-EXAMPLE
descr:          Example routers
members:        rtr1.example.net, 192.0.2.1, RTRS-CORE
mp-members:     2001:db8::1
tech-c:         EX1-AP
admin-c:        EX1-AP
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const FILTER_SET: &str = "\
filter-set:     FLTR-MARTIAN
descr:          Martian prefixes
filter:         { 10.0.0.0/8^+, 192.168.0.0/16^+ }
tech-c:         EX1-AP
admin-c:        EX1-AP
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const PEERING_SET: &str = "\
peering-set:    PRNG-EXAMPLE
descr:          Example peerings
peering:        AS64501 at 192.0.2.1
mp-peering:     AS64501 2001:db8::1
tech-c:         EX1-AP
admin-c:        EX1-AP
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const INET_RTR: &str = "\
inet-rtr:       rtr1.example.net
descr:          Example core router
alias:          core1.example.net
local-as:       AS64500
ifaddr:         192.0.2.1 masklen 24
interface:      2001:db8::1 masklen 64
peer:           BGP4 192.0.2.2 asno(AS64501)
mp-peer:        MPBGP 2001:db8::2 asno(AS64501)
member-of:      RTRS-EXAMPLE
admin-c:        EX1-AP
tech-c:         EX1-AP
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const ROUTE: &str = "\
route:          192.0.2.0/24
descr:          Example route
origin:         AS64500
holes:          192.0.2.128/25, 192.0.2.64/26
member-of:      RS-EXAMPLE
inject:         at 192.0.2.1 action dpa = 100;
aggr-mtd:       outbound AS64501 OR AS-EXAMPLE
components:     { 192.0.2.0/25^+ } protocol BGP4 AS64501
pingable:       192.0.2.1
ping-hdl:       EX1-AP
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const ROUTE6: &str = "\
route6:         2001:db8::/32
descr:          Example IPv6 route
origin:         AS64500
holes:          2001:db8:1::/48
member-of:      RS-EXAMPLE
inject:         at 2001:db8::1 action dpa = 10;
pingable:       2001:db8::1
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const DOMAIN: &str = "\
domain:         2.0.192.in-addr.arpa
descr:          Reverse zone for 192.0.2.0/24
admin-c:        EX1-AP
tech-c:         EX1-AP
zone-c:         EX1-AP
nserver:        ns1.example.net
nserver:        ns2.example.net 192.0.2.53
ds-rdata:       52151 1 1 13ee60f7499a70e5aadaf05828e7fc59e8e70bc1
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const ORGANISATION: &str = "\
organisation:   ORG-EA1-AP
org-name:       Example Networks Pty Ltd
org-type:       LIR
country:        AU
address:        1 Example Street
phone:          +61 7 3858 3100
e-mail:         info@example.net
mnt-ref:        MAINT-EXAMPLE
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const IRT: &str = "\
irt:            IRT-EXAMPLE
address:        1 Example Street
e-mail:         irt@example.net
abuse-mailbox:  abuse@example.net
admin-c:        EX1-AP
tech-c:         EX1-AP
auth:           PGPKEY-1A2B3C4D
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const KEY_CERT: &str = "\
key-cert:       PGPKEY-1A2B3C4D
method:         PGP
owner:          John Smith <john@example.net>
fingerpr:       1A2B 3C4D 5E6F 7A8B 9C0D  1E2F 3A4B 5C6D 1A2B 3C4D
certif:         -----BEGIN PGP PUBLIC KEY BLOCK-----
certif:         mQINBGBexampleAAAAAAAAAAAA
certif:         -----END PGP PUBLIC KEY BLOCK-----
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const POEM: &str = "\
poem:           POEM-EXAMPLE
form:           FORM-HAIKU
text:           an old silent pond
text:           a frog jumps into the pond
text:           splash! silence again
author:         EX1-AP
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const POETIC_FORM: &str = "\
poetic-form:    FORM-HAIKU
descr:          Three lines of five, seven and five syllables
admin-c:        EX1-AP
mnt-by:         MAINT-EXAMPLE
source:         APNIC
";

pub const RIPE_INETNUM: &str = "\
inetnum:        193.0.0.0 - 193.0.7.255
netname:        EXAMPLE-NET
country:        NL
org:            ORG-EA1-RIPE
sponsoring-org: ORG-LIR1-RIPE
admin-c:        EX1-RIPE
tech-c:         EX1-RIPE
status:         ASSIGNED PI
mnt-by:         MAINT-EXAMPLE
created:        2003-03-17T12:15:57Z
last-modified:  2024-01-31T09:00:00Z
source:         RIPE
";

pub const RIPE_AUT_NUM: &str = "\
aut-num:        AS3333
as-name:        RIPE-NCC-AS
import:         from AS12859 accept ANY
export:         to AS12859 announce AS3333
org:            ORG-EA1-RIPE
admin-c:        EX1-RIPE
tech-c:         EX1-RIPE
status:         ASSIGNED
mnt-by:         MAINT-EXAMPLE
created:        2002-09-18T12:00:00Z
last-modified:  2024-01-31T09:00:00Z
source:         RIPE
";

pub const RIPE_ORGANISATION: &str = "\
organisation:   ORG-EA1-RIPE
org-name:       Example Networks B.V.
org-type:       OTHER
address:        Stationsplein 11
e-mail:         info@example.net
mnt-ref:        MAINT-EXAMPLE
mnt-by:         MAINT-EXAMPLE
source:         RIPE
";

/// Every APNIC fixture, one per object type.
pub fn apnic_objects() -> Vec<&'static str> {
    vec![
        MNTNER,
        PERSON,
        ROLE,
        INETNUM,
        INET6NUM,
        AUT_NUM,
        AS_BLOCK,
        AS_SET,
        ROUTE_SET,
        RTR_SET,
        FILTER_SET,
        PEERING_SET,
        INET_RTR,
        ROUTE,
        ROUTE6,
        DOMAIN,
        ORGANISATION,
        IRT,
        KEY_CERT,
        POEM,
        POETIC_FORM,
    ]
}

pub fn ripe_objects() -> Vec<&'static str> {
    vec![RIPE_INETNUM, RIPE_AUT_NUM, RIPE_ORGANISATION]
}
