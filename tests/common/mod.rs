//! Common test utilities for RPSL validation testing.
//!
//! This module provides catalog accessors, object builders, fixtures and
//! assertion macros shared by the integration tests.

use rpsl_schema::{Catalog, Dialect, SchemaConfig, install};
use std::sync::OnceLock;

pub mod builders;
pub mod fixtures;

static RIPE_CATALOG: OnceLock<Catalog> = OnceLock::new();

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The process-wide catalog, installed with the default configuration.
pub fn apnic() -> &'static Catalog {
    init_logging();
    install(&SchemaConfig::default()).expect("Failed to install APNIC catalog")
}

/// A RIPE catalog built outside the process-wide slot.
pub fn ripe() -> &'static Catalog {
    init_logging();
    RIPE_CATALOG.get_or_init(|| Catalog::build(Dialect::Ripe).expect("Failed to build RIPE catalog"))
}

/// Assert that validation produced no findings at all.
#[macro_export]
macro_rules! assert_no_findings {
    ($messages:expr) => {
        let messages = &$messages;
        assert!(
            !messages.has_errors(),
            "Expected no findings, got: {}",
            serde_json::to_string_pretty(messages).unwrap()
        );
    };
}

/// Assert the exact sequence of finding kinds, object-level findings first.
#[macro_export]
macro_rules! assert_findings {
    ($messages:expr, [$($kind:ident),* $(,)?]) => {
        let messages = &$messages;
        let expected: Vec<rpsl_schema::FindingKind> = vec![$(rpsl_schema::FindingKind::$kind),*];
        assert_eq!(
            messages.kinds(),
            expected,
            "Unexpected findings: {}",
            serde_json::to_string_pretty(messages).unwrap()
        );
    };
}
