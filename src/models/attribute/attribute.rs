//! Attribute value entity
//!
//! One typed value instance attached to an owning entity. The raw value is
//! validated through the datatype collaborator before the attribute can
//! exist, so an attribute never carries an un-validated value. Attributes are
//! voided when superseded, never hard-deleted, unless they were never
//! persisted, in which case there is no history to preserve.

use macros::DomainObject;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::context::AuditContext;
use crate::datatype::AttributeDatatype;
use crate::error::Result;
use crate::models::attribute::AttributeType;
use crate::models::core::{AuditInfo, Identity, VoidState};

/// A single typed value instance of an [`AttributeType`]
#[derive(Debug, Clone, Serialize, Deserialize, DomainObject)]
pub struct Attribute {
    #[domain(identity)]
    identity: Identity,
    #[domain(audit)]
    audit: AuditInfo,
    #[domain(void)]
    void_state: VoidState,
    attribute_type: AttributeType,
    /// Canonical serialized value, already validated against the datatype
    value: String,
    /// Uuid of the owning entity; set only when the owner attaches this
    /// attribute, never by callers
    owner: Option<Uuid>,
}

impl Attribute {
    /// Create an attribute, validating the raw value through its datatype
    ///
    /// The attribute is constructed detached: the owner back-reference is
    /// filled in when a [`Customizable`](crate::models::attribute::Customizable)
    /// owner attaches it.
    pub fn new(
        attribute_type: AttributeType,
        raw_value: &str,
        datatype: &dyn AttributeDatatype,
        ctx: &AuditContext,
    ) -> Result<Self> {
        debug_assert_eq!(
            attribute_type.datatype_descriptor(),
            datatype.descriptor(),
            "attribute validated against the wrong datatype"
        );
        let value = datatype.validate(raw_value)?;
        Ok(Self {
            identity: Identity::new(),
            audit: AuditInfo::created(ctx),
            void_state: VoidState::default(),
            attribute_type,
            value,
            owner: None,
        })
    }

    /// Reconstruct an attribute loaded from storage
    #[must_use]
    pub const fn hydrated(
        identity: Identity,
        audit: AuditInfo,
        void_state: VoidState,
        attribute_type: AttributeType,
        value: String,
        owner: Option<Uuid>,
    ) -> Self {
        Self {
            identity,
            audit,
            void_state,
            attribute_type,
            value,
            owner,
        }
    }

    /// The schema this attribute is an instance of
    #[must_use]
    pub const fn attribute_type(&self) -> &AttributeType {
        &self.attribute_type
    }

    /// The canonical serialized value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Uuid of the owning entity, once attached
    #[must_use]
    pub const fn owner(&self) -> Option<&Uuid> {
        self.owner.as_ref()
    }

    /// Attach the owner back-reference
    ///
    /// Crate-internal: only the `Customizable` machinery sets the owner, so
    /// an attribute is always reachable from its owner's collection.
    pub(crate) fn set_owner(&mut self, owner: Option<Uuid>) {
        self.owner = owner;
    }
}
