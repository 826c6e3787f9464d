//! Validation tests module.
//!
//! Tests are grouped by concern; each file starts from the shared fixtures
//! and builders in `common`.

pub mod concurrency;
pub mod findings;
pub mod objects;
pub mod references;
pub mod syntax;
pub mod templates;

// Re-export commonly used test utilities
pub use crate::common::{
    apnic,
    builders::ObjectBuilder,
    fixtures::{apnic_objects, ripe_objects},
    ripe,
};

// Re-export assertion macros
pub use crate::{assert_findings, assert_no_findings};
