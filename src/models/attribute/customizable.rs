//! Customizable, the extension-attribute host
//!
//! Any entity that supports ad-hoc extension fields implements this trait
//! over its attribute collection. The collection is owned exclusively by the
//! entity (composition); the trait's default methods carry the one genuinely
//! tricky algorithm in the model: replace-vs-append semantics with
//! void-if-persisted, remove-if-temporary supersession.
//!
//! None of these operations are internally synchronized; one logical
//! transaction manipulates one owner at a time.

use itertools::Itertools;
use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::context::AuditContext;
use crate::error::{ModelError, Result};
use crate::models::attribute::{Attribute, AttributeType};
use crate::models::core::{Identified, Voidable};

/// Capability allowing an entity to hold a dynamic set of [`Attribute`]s
pub trait Customizable: Identified {
    /// The full attribute collection, voided entries included
    fn attributes(&self) -> &[Attribute];

    /// Mutable access to the attribute collection
    fn attributes_mut(&mut self) -> &mut Vec<Attribute>;

    /// The non-voided attributes, as a fresh list on every call
    fn active_attributes(&self) -> Vec<&Attribute> {
        self.attributes()
            .iter()
            .filter(|attr| !attr.is_voided())
            .collect()
    }

    /// The non-voided attributes of one type, as a fresh list on every call
    fn active_attributes_of_type(&self, attribute_type: &AttributeType) -> Vec<&Attribute> {
        self.attributes()
            .iter()
            .filter(|attr| !attr.is_voided() && attr.attribute_type() == attribute_type)
            .collect()
    }

    /// The first active value of one type, if any
    fn attribute_value(&self, attribute_type: &AttributeType) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|attr| !attr.is_voided() && attr.attribute_type() == attribute_type)
            .map(Attribute::value)
    }

    /// Append an attribute, taking ownership of it
    ///
    /// Never consults `max_occurs`: callers using this method are
    /// deliberately managing multiple instances of the type themselves.
    fn add_attribute(&mut self, mut attribute: Attribute) {
        attribute.set_owner(self.uuid().copied());
        self.attributes_mut().push(attribute);
    }

    /// Replace the active attribute(s) of the incoming attribute's type
    ///
    /// Intended for types with `max_occurs == 1` but written generically:
    /// when exactly one active attribute of the type exists and its value
    /// equals the new one, this is a true no-op: no void, no new entry, no
    /// audit churn. Otherwise every active attribute of the type is
    /// superseded (voided when it has a persisted id, removed outright when
    /// it never had one) and the new attribute is appended. With zero active
    /// attributes of the type, nothing is superseded and the attribute is
    /// simply added.
    fn set_attribute(&mut self, attribute: Attribute, ctx: &AuditContext) -> Result<()> {
        let active_of_type: Vec<usize> = self
            .attributes()
            .iter()
            .enumerate()
            .filter(|(_, existing)| {
                !existing.is_voided()
                    && existing.attribute_type() == attribute.attribute_type()
            })
            .map(|(index, _)| index)
            .collect();

        if active_of_type.len() == 1 {
            let existing = &self.attributes()[active_of_type[0]];
            // Value equality, not attribute identity: unchanged data must
            // not churn the audit trail.
            if existing.value() == attribute.value() {
                return Ok(());
            }
        }

        let reason = format!("superseded by new value: {}", attribute.value());
        for index in active_of_type.into_iter().rev() {
            if self.attributes()[index].id().is_some() {
                self.attributes_mut()[index].void(&reason, ctx)?;
                log::debug!(
                    "voided superseded attribute of type {}",
                    attribute.attribute_type().name()
                );
            } else {
                // Never persisted: nothing to preserve, drop it outright.
                self.attributes_mut().remove(index);
            }
        }

        self.add_attribute(attribute);
        Ok(())
    }

    /// Count the active attributes per attribute-type uuid
    fn active_counts(&self) -> FxHashMap<Uuid, usize> {
        let mut counts = FxHashMap::default();
        for attr in self.attributes() {
            if attr.is_voided() {
                continue;
            }
            if let Some(type_uuid) = attr.attribute_type().uuid() {
                *counts.entry(*type_uuid).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Check the active counts of the given types against their bounds
    ///
    /// Advisory: nothing calls this implicitly. Duplicate types in the input
    /// are checked once. When the active count of a type falls outside
    /// `[min_occurs, max_occurs]` the first violation is returned.
    fn validate_cardinality<'a>(
        &self,
        types: impl IntoIterator<Item = &'a AttributeType>,
    ) -> Result<()> {
        let counts = self.active_counts();
        for attribute_type in types
            .into_iter()
            .unique_by(|ty| ty.uuid().copied())
        {
            let count = attribute_type
                .uuid()
                .and_then(|uuid| counts.get(uuid).copied())
                .unwrap_or(0);
            let below_min = count < attribute_type.min_occurs() as usize;
            let above_max = attribute_type
                .max_occurs()
                .is_some_and(|max| count > max as usize);
            if below_min || above_max {
                if above_max {
                    log::warn!(
                        "owner exceeds max_occurs for attribute type {}",
                        attribute_type.name()
                    );
                }
                return Err(ModelError::CardinalityViolation {
                    type_name: attribute_type.name().to_string(),
                    count,
                    min_occurs: attribute_type.min_occurs(),
                    max_occurs: attribute_type.max_occurs(),
                });
            }
        }
        Ok(())
    }
}
