//! Attribute catalog, object templates and object validation.
//!
//! # Key Types
//!
//! - [`Catalog`] - Every attribute type and object template of one dialect
//! - [`AttributeType`] - Name, flag, syntax, cardinality and references of one attribute
//! - [`ObjectTemplate`] - Which attributes an object type may carry, and how often
//! - [`ObjectMessages`] - Findings produced by [`Catalog::validate`]
//!
//! # Examples
//!
//! ```rust
//! use rpsl_schema::object::{ObjectType, RpslObject};
//! use rpsl_schema::schema::Catalog;
//! use rpsl_schema::dialect::Dialect;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::build(Dialect::Apnic)?;
//! let object = RpslObject::parse("mntner: MAINT-EXAMPLE\nsource: APNIC\n")?;
//! let messages = catalog.validate(&object);
//! assert!(messages.has_errors());
//! assert!(catalog.is_valid(ObjectType::AutNum, "aut-num", "AS4294967295")?);
//! # Ok(())
//! # }
//! ```

pub mod attribute;
pub mod catalog;
pub mod template;
pub mod validation;


pub use attribute::{AttributeType, Cardinality};
pub use catalog::{Catalog, active, install};
pub use template::{AttributeTemplate, KeyRole, ObjectTemplate, Occurrence, Requirement};
pub use validation::{FindingKind, FindingRecord, ObjectMessages, ValidationFinding};
