//! Catalog configuration.
//!
//! The configuration is read once, when the catalog is installed. Only the
//! dialect is configurable.

use crate::dialect::Dialect;
use crate::error::SchemaResult;
use serde::{Deserialize, Serialize};

/// Environment variable naming the dialect to install.
pub const DIALECT_ENV: &str = "RPSL_DIALECT";

/// Settings consulted by [`install`](crate::schema::install).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub dialect: Dialect,
}

impl SchemaConfig {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Read the configuration from `RPSL_DIALECT`.
    ///
    /// An unset or empty variable selects the default dialect; any value
    /// other than `apnic` or `ripe` is an error.
    pub fn from_env() -> SchemaResult<Self> {
        Self::from_dialect_var(std::env::var(DIALECT_ENV).ok().as_deref())
    }

    fn from_dialect_var(value: Option<&str>) -> SchemaResult<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(name) => Ok(Self::new(name.parse()?)),
        }
    }
}
