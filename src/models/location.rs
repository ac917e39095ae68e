//! Location entity model
//!
//! A location is reference metadata: a care site that transactional records
//! point at. Locations are retired rather than voided: retirement blocks
//! future selection without invalidating the historical records that
//! reference them.

use macros::DomainObject;
use serde::{Deserialize, Serialize};

use crate::context::AuditContext;
use crate::models::attribute::Attribute;
use crate::models::core::{AuditInfo, Identity, RetireState};

/// One care site
#[derive(Debug, Clone, Serialize, Deserialize, DomainObject)]
pub struct Location {
    #[domain(identity)]
    identity: Identity,
    #[domain(audit)]
    audit: AuditInfo,
    #[domain(retire)]
    retire_state: RetireState,
    #[domain(attributes)]
    attributes: Vec<Attribute>,
    name: String,
    description: Option<String>,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(name: impl Into<String>, ctx: &AuditContext) -> Self {
        Self {
            identity: Identity::new(),
            audit: AuditInfo::created(ctx),
            retire_state: RetireState::default(),
            attributes: Vec::new(),
            name: name.into(),
            description: None,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The location's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The location's description
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Rename the location and refresh the audit trail
    pub fn rename(&mut self, name: impl Into<String>, ctx: &AuditContext) {
        self.name = name.into();
        self.audit.touch(ctx);
    }
}
