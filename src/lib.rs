//! RPSL schema and validation engine.
//!
//! Describes the object types of a Routing Policy Specification Language
//! registry, the attributes each type may carry and the syntax of every
//! attribute value, and validates objects against those rules.
//!
//! # Core Components
//!
//! - [`Catalog`] - Attribute types and object templates of one registry dialect
//! - [`RpslObject`] - An object as ordered `name: value` attribute lines
//! - [`ObjectMessages`] - Every finding produced by validating one object
//! - [`Dialect`] - The registry whose schema is in force (APNIC or RIPE)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rpsl_schema::{RpslObject, SchemaConfig, install};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = install(&SchemaConfig::from_env()?)?;
//! let object = RpslObject::parse(
//!     "route:  192.0.2.0/24\n\
//!      descr:  Example route\n\
//!      origin: AS64500\n\
//!      mnt-by: MAINT-EXAMPLE\n\
//!      source: APNIC\n",
//! )?;
//! for (index, finding) in catalog.validate(&object).iter() {
//!     println!("{:?}: {}", index, finding);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dialect;
pub mod documentation;
pub mod error;
pub mod object;
pub mod parser;
pub mod schema;
pub mod syntax;

// Core re-exports
pub use config::SchemaConfig;
pub use dialect::{Dialect, DialectProvider};
pub use error::{AttributeNotFound, ObjectParseError, SchemaError, SchemaResult, UnknownObjectType};
pub use object::{ObjectType, RpslAttribute, RpslObject};
pub use schema::{
    AttributeTemplate, AttributeType, Cardinality, Catalog, FindingKind, FindingRecord, KeyRole,
    ObjectMessages, ObjectTemplate, Occurrence, Requirement, ValidationFinding, active, install,
};
pub use syntax::Syntax;
