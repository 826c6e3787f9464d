//! Object validation against a catalog.
//!
//! Validation never stops at the first problem: every attribute instance is
//! checked and every template rule is applied, and all findings come back
//! together in an [`ObjectMessages`].

use super::catalog::Catalog;
use super::template::{Occurrence, Requirement};
use crate::object::{ObjectType, RpslObject};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A problem found while validating an object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFinding {
    /// The attribute name resolves to nothing in the catalog
    #[error("\"{attribute}\" is not a known RPSL attribute")]
    UnknownAttribute { attribute: String },

    /// A known attribute that the object type's template does not list
    #[error("\"{attribute}\" is not valid for this object type")]
    InvalidAttributeForObjectType {
        attribute: String,
        object_type: ObjectType,
    },

    /// The value does not satisfy the attribute's syntax
    #[error("Syntax error in {value}")]
    SyntaxError { attribute: String, value: String },

    /// A mandatory attribute is absent
    #[error("Mandatory attribute \"{attribute}\" is missing")]
    MissingMandatoryAttribute { attribute: String },

    /// A single-occurrence attribute appears more than once
    #[error("Attribute \"{attribute}\" appears more than once")]
    TooManyAttributesOfType { attribute: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    UnknownAttribute,
    InvalidAttributeForObjectType,
    SyntaxError,
    MissingMandatoryAttribute,
    TooManyAttributesOfType,
}

impl ValidationFinding {
    pub fn kind(&self) -> FindingKind {
        match self {
            ValidationFinding::UnknownAttribute { .. } => FindingKind::UnknownAttribute,
            ValidationFinding::InvalidAttributeForObjectType { .. } => {
                FindingKind::InvalidAttributeForObjectType
            }
            ValidationFinding::SyntaxError { .. } => FindingKind::SyntaxError,
            ValidationFinding::MissingMandatoryAttribute { .. } => {
                FindingKind::MissingMandatoryAttribute
            }
            ValidationFinding::TooManyAttributesOfType { .. } => {
                FindingKind::TooManyAttributesOfType
            }
        }
    }

    /// The attribute the finding is about.
    pub fn attribute(&self) -> &str {
        match self {
            ValidationFinding::UnknownAttribute { attribute }
            | ValidationFinding::InvalidAttributeForObjectType { attribute, .. }
            | ValidationFinding::SyntaxError { attribute, .. }
            | ValidationFinding::MissingMandatoryAttribute { attribute }
            | ValidationFinding::TooManyAttributesOfType { attribute } => attribute,
        }
    }

    pub fn to_record(&self) -> FindingRecord {
        FindingRecord {
            kind: self.kind(),
            attribute: self.attribute().to_string(),
            message: self.to_string(),
        }
    }
}

/// Serializable view of a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingRecord {
    pub kind: FindingKind,
    pub attribute: String,
    pub message: String,
}

/// All findings for one object.
///
/// Object-level findings (missing or repeated attributes) are kept apart
/// from findings against a particular attribute instance, which are keyed
/// by the instance's index in the object. Each list is in detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMessages {
    object: Vec<ValidationFinding>,
    attributes: BTreeMap<usize, Vec<ValidationFinding>>,
}

impl ObjectMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_object_finding(&mut self, finding: ValidationFinding) {
        self.object.push(finding);
    }

    pub fn add_attribute_finding(&mut self, index: usize, finding: ValidationFinding) {
        self.attributes.entry(index).or_default().push(finding);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.object.len() + self.attributes.values().map(Vec::len).sum::<usize>()
    }

    pub fn object_findings(&self) -> &[ValidationFinding] {
        &self.object
    }

    pub fn attribute_findings(&self, index: usize) -> &[ValidationFinding] {
        self.attributes.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every finding with its attribute index, object-level findings first.
    pub fn iter(&self) -> impl Iterator<Item = (Option<usize>, &ValidationFinding)> {
        self.object.iter().map(|finding| (None, finding)).chain(
            self.attributes
                .iter()
                .flat_map(|(index, findings)| findings.iter().map(move |f| (Some(*index), f))),
        )
    }

    pub fn kinds(&self) -> Vec<FindingKind> {
        self.iter().map(|(_, finding)| finding.kind()).collect()
    }
}

#[derive(Serialize)]
struct AttributeFindings {
    index: usize,
    findings: Vec<FindingRecord>,
}

impl Serialize for ObjectMessages {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let object: Vec<FindingRecord> = self.object.iter().map(|f| f.to_record()).collect();
        let attributes: Vec<AttributeFindings> = self
            .attributes
            .iter()
            .map(|(index, findings)| AttributeFindings {
                index: *index,
                findings: findings.iter().map(|f| f.to_record()).collect(),
            })
            .collect();

        let mut state = serializer.serialize_struct("ObjectMessages", 3)?;
        state.serialize_field("error_count", &self.error_count())?;
        state.serialize_field("object", &object)?;
        state.serialize_field("attributes", &attributes)?;
        state.end()
    }
}

impl Catalog {
    /// Validate an object against this catalog.
    pub fn validate(&self, object: &RpslObject) -> ObjectMessages {
        let object_type = object.object_type();
        let template = self.template_for(object_type);
        let mut messages = ObjectMessages::new();
        let mut counts: HashMap<&'static str, usize> = HashMap::new();

        // Per-instance checks
        for (index, instance) in object.attributes().iter().enumerate() {
            let Ok(attribute) = self.attribute(&instance.name) else {
                messages.add_attribute_finding(
                    index,
                    ValidationFinding::UnknownAttribute {
                        attribute: instance.name.clone(),
                    },
                );
                continue;
            };
            let Some(entry) = template.entry(attribute.name) else {
                messages.add_attribute_finding(
                    index,
                    ValidationFinding::InvalidAttributeForObjectType {
                        attribute: attribute.name.to_string(),
                        object_type,
                    },
                );
                continue;
            };
            if entry.requirement != Requirement::Generated {
                let value = instance.clean_value();
                if !attribute.is_valid(object_type, &value) {
                    messages.add_attribute_finding(
                        index,
                        ValidationFinding::SyntaxError {
                            attribute: attribute.name.to_string(),
                            value,
                        },
                    );
                }
            }
            *counts.entry(attribute.name).or_default() += 1;
        }

        // Template rules
        for entry in template.entries() {
            let count = counts.get(entry.attribute).copied().unwrap_or(0);
            if entry.requirement == Requirement::Mandatory && count == 0 {
                messages.add_object_finding(ValidationFinding::MissingMandatoryAttribute {
                    attribute: entry.attribute.to_string(),
                });
            }
            if entry.occurrence == Occurrence::Single && count > 1 {
                messages.add_object_finding(ValidationFinding::TooManyAttributesOfType {
                    attribute: entry.attribute.to_string(),
                });
            }
        }

        debug!(
            "Validated {} '{}': {} finding(s)",
            object_type,
            object.key(),
            messages.error_count()
        );
        messages
    }
}
