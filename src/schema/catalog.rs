//! The attribute catalog and template table for one dialect.
//!
//! A [`Catalog`] is built once from a dialect's declarative tables, checked
//! for internal consistency, and then never changes. [`install`] publishes
//! one catalog for the whole process; [`active`] hands it out.

use super::attribute::{AttributeType, Cardinality};
use super::template::{KeyRole, ObjectTemplate, Occurrence};
use crate::config::SchemaConfig;
use crate::dialect::{Dialect, DialectProvider};
use crate::error::{AttributeNotFound, SchemaError, SchemaResult};
use crate::object::ObjectType;
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};
use std::fmt::Write;
use std::sync::OnceLock;

static ACTIVE: OnceLock<Catalog> = OnceLock::new();

/// All attribute types and object templates of one dialect.
#[derive(Debug)]
pub struct Catalog {
    dialect: Dialect,
    attributes: Vec<AttributeType>,
    /// Lowercase names and flags to positions in `attributes`
    index: HashMap<&'static str, usize>,
    /// One template per object type, by ordinal
    templates: Vec<ObjectTemplate>,
}

impl Catalog {
    /// Build the catalog for a dialect.
    pub fn build(dialect: Dialect) -> SchemaResult<Self> {
        Self::from_provider(dialect.provider())
    }

    /// Build a catalog from any dialect provider's tables.
    ///
    /// Fails on duplicate attribute names or flags, on templates that name
    /// unknown attributes or repeat one, on a malformed class attribute, on
    /// more than one primary key, and on any object type left without a
    /// template.
    pub fn from_provider(provider: &dyn DialectProvider) -> SchemaResult<Self> {
        let dialect = provider.dialect();
        let attributes = provider.attributes();

        let mut index = HashMap::with_capacity(attributes.len() * 2);
        for (position, attribute) in attributes.iter().enumerate() {
            if index.insert(attribute.name, position).is_some() {
                return Err(SchemaError::DuplicateAttribute {
                    dialect: dialect.to_string(),
                    name: attribute.name.to_string(),
                });
            }
        }
        for (position, attribute) in attributes.iter().enumerate() {
            if index.insert(attribute.flag, position).is_some() {
                return Err(SchemaError::DuplicateFlag {
                    dialect: dialect.to_string(),
                    name: attribute.name.to_string(),
                    flag: attribute.flag.to_string(),
                });
            }
        }

        let mut slots: Vec<Option<ObjectTemplate>> = vec![None; ObjectType::ALL.len()];
        for template in provider.templates() {
            check_template(&template, &attributes, &index)?;
            let slot = &mut slots[template.object_type().ordinal()];
            if slot.is_some() {
                return Err(SchemaError::DuplicateTemplate {
                    object_type: template.object_type(),
                });
            }
            *slot = Some(template);
        }
        let templates = ObjectType::ALL
            .iter()
            .zip(slots)
            .map(|(object_type, slot)| {
                slot.ok_or_else(|| SchemaError::MissingTemplate {
                    dialect: dialect.to_string(),
                    object_type: *object_type,
                })
            })
            .collect::<SchemaResult<Vec<_>>>()?;

        info!(
            "Built {} catalog: {} attributes, {} templates",
            dialect,
            attributes.len(),
            templates.len()
        );

        Ok(Self {
            dialect,
            attributes,
            index,
            templates,
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// All attribute types, in table order.
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeType> {
        self.attributes.iter()
    }

    /// Resolve an attribute by name, flag or legacy `*xx` alias.
    pub fn attribute(&self, name_or_flag: &str) -> Result<&AttributeType, AttributeNotFound> {
        let key = name_or_flag.trim();
        let key = match key.strip_prefix('*') {
            Some(flag) if key.len() == 3 => flag,
            _ => key,
        }
        .to_ascii_lowercase();
        self.index
            .get(key.as_str())
            .map(|position| &self.attributes[*position])
            .ok_or_else(|| AttributeNotFound(name_or_flag.to_string()))
    }

    pub fn template_for(&self, object_type: ObjectType) -> &ObjectTemplate {
        &self.templates[object_type.ordinal()]
    }

    pub fn templates(&self) -> impl Iterator<Item = &ObjectTemplate> {
        self.templates.iter()
    }

    /// Check a value against the named attribute's syntax.
    pub fn is_valid(
        &self,
        object_type: ObjectType,
        attribute: &str,
        value: &str,
    ) -> Result<bool, AttributeNotFound> {
        Ok(self.attribute(attribute)?.is_valid(object_type, value))
    }

    /// Split a raw value into the named attribute's sub-values.
    pub fn split_value(&self, attribute: &str, value: &str) -> Result<Vec<String>, AttributeNotFound> {
        Ok(self.attribute(attribute)?.split_value(value))
    }

    /// Object types the named attribute's value may refer to.
    pub fn references(
        &self,
        attribute: &str,
        value: &str,
    ) -> Result<&'static [ObjectType], AttributeNotFound> {
        Ok(self.attribute(attribute)?.references(value))
    }

    pub fn cardinality(&self, attribute: &str) -> Result<Cardinality, AttributeNotFound> {
        Ok(self.attribute(attribute)?.cardinality)
    }

    pub fn describe(
        &self,
        attribute: &str,
        object_type: ObjectType,
    ) -> Result<&'static str, AttributeNotFound> {
        Ok(self.attribute(attribute)?.describe(object_type))
    }

    /// Render a template with each attribute's documentation and syntax,
    /// the way `whois -v` prints it.
    pub fn describe_template(&self, object_type: ObjectType) -> String {
        let template = self.template_for(object_type);
        let mut out = String::new();
        let _ = writeln!(out, "% The {} class:\n", object_type);
        out.push_str(&template.render());
        let _ = writeln!(
            out,
            "\n% The content of the attributes of the {} class are:\n",
            object_type
        );
        for entry in template.entries() {
            let Ok(attribute) = self.attribute(entry.attribute) else {
                continue;
            };
            let _ = writeln!(out, "{}", attribute.name);
            for line in attribute.describe(object_type).lines() {
                let _ = writeln!(out, "   {}", line);
            }
            let _ = writeln!(out);
            for line in attribute.describe_syntax(object_type).lines() {
                let _ = writeln!(out, "     {}", line);
            }
            let _ = writeln!(out);
        }
        out
    }
}

fn check_template(
    template: &ObjectTemplate,
    attributes: &[AttributeType],
    index: &HashMap<&'static str, usize>,
) -> SchemaResult<()> {
    let object_type = template.object_type();

    let mut seen = HashSet::new();
    for entry in template.entries() {
        // Templates must use canonical names, never flags
        let known = index
            .get(entry.attribute)
            .is_some_and(|position| attributes[*position].name == entry.attribute);
        if !known {
            return Err(SchemaError::unknown_template_attribute(
                object_type,
                entry.attribute,
            ));
        }
        if !seen.insert(entry.attribute) {
            return Err(SchemaError::DuplicateTemplateAttribute {
                object_type,
                attribute: entry.attribute.to_string(),
            });
        }
    }

    let class = template
        .class_attribute()
        .ok_or_else(|| SchemaError::invalid_class(object_type, "template is empty"))?;
    if class.attribute != object_type.name() {
        return Err(SchemaError::invalid_class(
            object_type,
            format!("first attribute is '{}'", class.attribute),
        ));
    }
    if class.occurrence != Occurrence::Single {
        return Err(SchemaError::invalid_class(object_type, "occurrence is not single"));
    }
    if !class.has_key(KeyRole::PrimaryKey) {
        return Err(SchemaError::invalid_class(object_type, "not a primary key"));
    }
    let cardinality = index
        .get(class.attribute)
        .map(|position| attributes[*position].cardinality);
    if cardinality != Some(Cardinality::Single) {
        return Err(SchemaError::invalid_class(object_type, "attribute is list-valued"));
    }

    let primary_keys = template
        .entries()
        .iter()
        .filter(|entry| entry.has_key(KeyRole::PrimaryKey))
        .count();
    if primary_keys > 1 {
        return Err(SchemaError::MultiplePrimaryKeys { object_type });
    }
    Ok(())
}

/// Build and publish the process-wide catalog.
///
/// The catalog is built completely before it is published. Installing the
/// dialect that is already active returns the existing catalog; asking for
/// a different one is an error.
pub fn install(config: &SchemaConfig) -> SchemaResult<&'static Catalog> {
    let requested = config.dialect;
    let mut published = false;
    let installed = match ACTIVE.get() {
        Some(catalog) => catalog,
        None => {
            let catalog = Catalog::build(requested)?;
            ACTIVE.get_or_init(|| {
                published = true;
                catalog
            })
        }
    };
    if installed.dialect != requested {
        warn!(
            "Refusing to install {} catalog, {} is already active",
            requested, installed.dialect
        );
        return Err(SchemaError::DialectAlreadyInstalled {
            installed: installed.dialect.to_string(),
            requested: requested.to_string(),
        });
    }
    if published {
        info!("Installed {} catalog", installed.dialect);
    } else {
        debug!("{} catalog already installed", installed.dialect);
    }
    Ok(installed)
}

/// The installed catalog, if any.
pub fn active() -> Option<&'static Catalog> {
    ACTIVE.get()
}
