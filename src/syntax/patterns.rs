//! Pattern syntaxes.

use super::{PatternSyntax, Syntax};
use regex::Regex;
use std::sync::LazyLock;

static NIC_HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([A-Z]{2,4}([1-9][0-9]{0,5})?(-[A-Z]{2,10})?|AUTO-[1-9][0-9]*([A-Z]{2,4})?)$")
        .unwrap()
});

static MNTNER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z]([A-Z0-9_-]*[A-Z0-9])?$").unwrap());

static MBRS_BY_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(ANY|[A-Z]([A-Z0-9_-]*[A-Z0-9])?)$").unwrap());

static ORGANISATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(ORG-[A-Z]{2,4}([1-9][0-9]{0,5})?-[A-Z][A-Z0-9_-]*|AUTO-[1-9][0-9]*([A-Z]{2,4})?)$")
        .unwrap()
});

static ORG_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^[\]\[A-Z0-9._"*()@,&:!'`+/-]+( [\]\[A-Z0-9._"*()@,&:!'`+/-]+){0,29}$"#)
        .unwrap()
});

static ORG_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(IANA|RIR|NIR|LIR|WHITEPAGES|DIRECT_ASSIGNMENT|OTHER)$").unwrap()
});

static PERSON_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z][A-Z0-9.`'_-]*( +[A-Z0-9.`'_-]+){0,9}$").unwrap()
});

static KEY_CERT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(PGPKEY-[0-9A-F]{8}|X509-[1-9][0-9]*|AUTO-[1-9][0-9]*)$").unwrap()
});

static AUTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(MD5-PW \$1\$[./0-9A-Z]{0,8}\$[./0-9A-Z]{22}|PGPKEY-[0-9A-F]{8}|X509-[1-9][0-9]*|SSO [^\s]+|AUTO-[1-9][0-9]*)$",
    )
    .unwrap()
});

static METHOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(PGP|X509)$").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\+[1-9][0-9 .()-]*[0-9]( ?ext\. ?[0-9]+)?$").unwrap()
});

static COUNTRY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^[A-Z]{2}$").unwrap());

static NETNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z][A-Z0-9_-]*$").unwrap());

static AS_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z]([A-Z0-9_-]*[A-Z0-9])?$").unwrap());

static SOURCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z][A-Z0-9_-]*[A-Z0-9]$").unwrap());

static IRT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^IRT-[A-Z0-9_-]*[A-Z0-9]$").unwrap());

static POEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^POEM-[A-Z0-9_-]*[A-Z0-9]$").unwrap());

static POETIC_FORM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^FORM-[A-Z0-9_-]*[A-Z0-9]$").unwrap());

pub static NIC_HANDLE: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &NIC_HANDLE_RE,
    max_length: Some(30),
    description: "From 2 to 4 characters optionally followed by up to 6 digits \
                  optionally followed by a source specification, or AUTO-<n>.",
});

pub static MNTNER_NAME: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &MNTNER_RE,
    max_length: Some(80),
    description: "Made up of letters, digits, '_' and '-'. The first character must be \
                  a letter and the last a letter or digit.",
});

pub static MBRS_BY_REF: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &MBRS_BY_REF_RE,
    max_length: Some(80),
    description: "A maintainer name or the keyword ANY.",
});

pub static ORGANISATION_ID: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &ORGANISATION_RE,
    max_length: Some(30),
    description: "'ORG-' followed by 2 to 4 characters, optional digits and a source \
                  specification, or AUTO-<n>.",
});

pub static ORG_NAME: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &ORG_NAME_RE,
    max_length: Some(90),
    description: "A list of words separated by white space, each made up of letters, \
                  digits and common punctuation.",
});

pub static ORG_TYPE: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &ORG_TYPE_RE,
    max_length: None,
    description: "One of IANA, RIR, NIR, LIR, WHITEPAGES, DIRECT_ASSIGNMENT or OTHER.",
});

pub static PERSON_NAME: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &PERSON_NAME_RE,
    max_length: Some(80),
    description: "Words separated by white space, the first starting with a letter. \
                  At most ten words.",
});

pub static KEY_CERT_ID: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &KEY_CERT_RE,
    max_length: None,
    description: "PGPKEY-<8 hex digits>, X509-<n> or AUTO-<n>.",
});

pub static AUTH_SCHEME: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &AUTH_RE,
    max_length: None,
    description: "<auth-scheme> <scheme-info>: MD5-PW <crypt-hash>, PGPKEY-<id>, \
                  X509-<n> or SSO <username>.",
});

pub static KEY_METHOD: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &METHOD_RE,
    max_length: None,
    description: "PGP or X509.",
});

pub static PHONE_NUMBER: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &PHONE_RE,
    max_length: Some(30),
    description: "'+' <country code> followed by digits, optionally with an \
                  'ext. <n>' extension.",
});

pub static COUNTRY_CODE: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &COUNTRY_RE,
    max_length: None,
    description: "A two-letter ISO 3166 country code.",
});

pub static LANGUAGE_CODE: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &COUNTRY_RE,
    max_length: None,
    description: "A two-letter ISO 639-1 language code.",
});

pub static NETNAME: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &NETNAME_RE,
    max_length: Some(80),
    description: "Made up of letters, digits, '_' and '-'. The first character must be \
                  a letter.",
});

pub static AS_NAME: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &AS_NAME_RE,
    max_length: Some(80),
    description: "Made up of letters, digits, '_' and '-'. The first character must be \
                  a letter and the last a letter or digit.",
});

pub static SOURCE: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &SOURCE_RE,
    max_length: Some(80),
    description: "The registry name, made up of letters, digits, '_' and '-'.",
});

pub static IRT_NAME: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &IRT_RE,
    max_length: Some(80),
    description: "'IRT-' followed by letters, digits, '_' and '-'.",
});

pub static POEM_NAME: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &POEM_RE,
    max_length: Some(80),
    description: "'POEM-' followed by letters, digits, '_' and '-'.",
});

pub static POETIC_FORM_NAME: Syntax = Syntax::Pattern(PatternSyntax {
    regex: &POETIC_FORM_RE,
    max_length: Some(80),
    description: "'FORM-' followed by letters, digits, '_' and '-'.",
});
