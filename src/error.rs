//! Error types for catalog construction, lookups and object reading.
//!
//! Validation problems found in an object are not errors in this sense: they
//! are accumulated as [`ValidationFinding`](crate::schema::ValidationFinding)
//! values. The types here cover the two other tiers: startup-fatal invariant
//! violations while building a catalog, and explicit lookup misses.

use crate::object::ObjectType;

/// Startup-fatal errors raised while building or installing a catalog.
///
/// Every variant is a programming-invariant violation in a dialect's
/// declarative tables. None of them is expected in production and none is
/// recovered from: a failed build publishes nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Two attribute records share a canonical name
    #[error("Duplicate attribute name '{name}' in {dialect} catalog")]
    DuplicateAttribute { dialect: String, name: String },

    /// Two attribute records share a flag, or a flag collides with a name
    #[error("Duplicate attribute flag '{flag}' (on '{name}') in {dialect} catalog")]
    DuplicateFlag {
        dialect: String,
        name: String,
        flag: String,
    },

    /// A template names an attribute that the catalog does not define
    #[error("Template '{object_type}' references unknown attribute '{attribute}'")]
    UnknownTemplateAttribute {
        object_type: ObjectType,
        attribute: String,
    },

    /// The same attribute appears twice in one template
    #[error("Template '{object_type}' declares attribute '{attribute}' more than once")]
    DuplicateTemplateAttribute {
        object_type: ObjectType,
        attribute: String,
    },

    /// Two templates were declared for the same object type
    #[error("Template for '{object_type}' declared more than once")]
    DuplicateTemplate { object_type: ObjectType },

    /// The first entry of a template is not a usable class attribute
    #[error("Template '{object_type}' has an invalid class attribute: {reason}")]
    InvalidClassAttribute {
        object_type: ObjectType,
        reason: String,
    },

    /// More than one template entry carries the primary key role
    #[error("Template '{object_type}' declares more than one primary key")]
    MultiplePrimaryKeys { object_type: ObjectType },

    /// A declared object type has no template in the running dialect
    #[error("No template for object type '{object_type}' in {dialect} catalog")]
    MissingTemplate {
        dialect: String,
        object_type: ObjectType,
    },

    /// The dialect selector could not be understood
    #[error("Unknown dialect '{0}', expected 'apnic' or 'ripe'")]
    UnknownDialect(String),

    /// A catalog for a different dialect is already installed
    #[error("Catalog already installed for dialect {installed}, refusing {requested}")]
    DialectAlreadyInstalled {
        installed: String,
        requested: String,
    },
}

/// Lookup miss for an attribute name, flag or `*xx` alias.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown attribute '{0}'")]
pub struct AttributeNotFound(pub String);

/// Lookup miss for an object type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown object type '{0}'")]
pub struct UnknownObjectType(pub String);

/// Errors reading an object from RPSL text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectParseError {
    /// Input contained no attribute lines
    #[error("Object text is empty")]
    Empty,

    /// A line was neither an attribute nor a continuation
    #[error("Line {line}: expected 'name: value', got '{content}'")]
    MalformedLine { line: usize, content: String },

    /// A continuation line appeared before any attribute
    #[error("Line {line}: continuation without a preceding attribute")]
    DanglingContinuation { line: usize },

    /// The class attribute does not name a known object type
    #[error("Unknown object type: {0}")]
    UnknownObjectType(#[from] UnknownObjectType),
}

// Convenience constructors for the variants raised from table folds
impl SchemaError {
    /// Create an invalid class attribute error
    pub fn invalid_class(object_type: ObjectType, reason: impl Into<String>) -> Self {
        Self::InvalidClassAttribute {
            object_type,
            reason: reason.into(),
        }
    }

    /// Create an unknown template attribute error
    pub fn unknown_template_attribute(
        object_type: ObjectType,
        attribute: impl Into<String>,
    ) -> Self {
        Self::UnknownTemplateAttribute {
            object_type,
            attribute: attribute.into(),
        }
    }
}

// Result type aliases for convenience
pub type SchemaResult<T> = Result<T, SchemaError>;
pub type ObjectParseResult<T> = Result<T, ObjectParseError>;
