//! Attribute type metadata
//!
//! An `AttributeType` is the administrator-defined schema for one kind of
//! extension attribute: a datatype descriptor, cardinality bounds and an
//! optional presentation-handler descriptor. The type itself is pure
//! metadata: cardinality is consulted by the owner, and datatype descriptors
//! are resolved by the external registry. Once in use a type is retired, not
//! deleted.

use macros::DomainObject;
use serde::{Deserialize, Serialize};

use crate::context::AuditContext;
use crate::error::{ModelError, Result};
use crate::models::core::{AuditInfo, Identity, RetireState};

/// User-definable schema for an extension attribute
#[derive(Debug, Clone, Serialize, Deserialize, DomainObject)]
pub struct AttributeType {
    #[domain(identity)]
    identity: Identity,
    #[domain(audit)]
    audit: AuditInfo,
    #[domain(retire)]
    retire_state: RetireState,
    name: String,
    description: Option<String>,
    /// Minimum number of active attributes of this type an owner must have
    min_occurs: u32,
    /// Upper bound on active attributes per owner; None means unbounded
    max_occurs: Option<u32>,
    /// Opaque descriptor resolved by the datatype registry
    datatype_descriptor: String,
    /// Opaque descriptor for an optional presentation handler
    handler_descriptor: Option<String>,
}

impl AttributeType {
    /// Create a new attribute type with unbounded cardinality
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        datatype_descriptor: impl Into<String>,
        ctx: &AuditContext,
    ) -> Self {
        Self {
            identity: Identity::new(),
            audit: AuditInfo::created(ctx),
            retire_state: RetireState::default(),
            name: name.into(),
            description: None,
            min_occurs: 0,
            max_occurs: None,
            datatype_descriptor: datatype_descriptor.into(),
            handler_descriptor: None,
        }
    }

    /// Reconstruct an attribute type loaded from storage
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn hydrated(
        identity: Identity,
        audit: AuditInfo,
        retire_state: RetireState,
        name: impl Into<String>,
        description: Option<String>,
        min_occurs: u32,
        max_occurs: Option<u32>,
        datatype_descriptor: impl Into<String>,
        handler_descriptor: Option<String>,
    ) -> Self {
        Self {
            identity,
            audit,
            retire_state,
            name: name.into(),
            description,
            min_occurs,
            max_occurs,
            datatype_descriptor: datatype_descriptor.into(),
            handler_descriptor,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the minimum number of active attributes per owner
    #[must_use]
    pub const fn with_min_occurs(mut self, min_occurs: u32) -> Self {
        self.min_occurs = min_occurs;
        self
    }

    /// Set the maximum number of active attributes per owner
    #[must_use]
    pub const fn with_max_occurs(mut self, max_occurs: u32) -> Self {
        self.max_occurs = Some(max_occurs);
        self
    }

    /// Set the presentation-handler descriptor
    #[must_use]
    pub fn with_handler(mut self, handler_descriptor: impl Into<String>) -> Self {
        self.handler_descriptor = Some(handler_descriptor.into());
        self
    }

    /// The type's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type's description
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Minimum number of active attributes of this type per owner
    #[must_use]
    pub const fn min_occurs(&self) -> u32 {
        self.min_occurs
    }

    /// Maximum number of active attributes of this type per owner, if bounded
    #[must_use]
    pub const fn max_occurs(&self) -> Option<u32> {
        self.max_occurs
    }

    /// The datatype descriptor resolved by the external registry
    #[must_use]
    pub fn datatype_descriptor(&self) -> &str {
        &self.datatype_descriptor
    }

    /// The presentation-handler descriptor, if any
    #[must_use]
    pub fn handler_descriptor(&self) -> Option<&str> {
        self.handler_descriptor.as_deref()
    }

    /// Check that the declared cardinality bounds are coherent
    ///
    /// A bounded maximum must be at least one and at least the minimum. The
    /// type never enforces these bounds on owners; see
    /// [`Customizable::validate_cardinality`](crate::models::attribute::Customizable::validate_cardinality).
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_occurs {
            if max == 0 {
                return Err(ModelError::InvalidCardinality {
                    name: self.name.clone(),
                    detail: "max_occurs must be at least 1".to_string(),
                });
            }
            if self.min_occurs > max {
                return Err(ModelError::InvalidCardinality {
                    name: self.name.clone(),
                    detail: format!(
                        "min_occurs {} exceeds max_occurs {max}",
                        self.min_occurs
                    ),
                });
            }
        }
        Ok(())
    }
}
