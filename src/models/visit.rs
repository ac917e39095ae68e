//! Visit entity model
//!
//! A visit is a transactional clinical record: a patient's presence at a
//! care site over an interval. Visits compose the full capability set:
//! identity, mutable audit, the void lifecycle and extension attributes.

use chrono::{DateTime, Utc};
use macros::DomainObject;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::context::AuditContext;
use crate::models::attribute::Attribute;
use crate::models::core::{AuditInfo, Identity, VoidState};

/// One patient visit
#[derive(Debug, Clone, Serialize, Deserialize, DomainObject)]
pub struct Visit {
    #[domain(identity)]
    identity: Identity,
    #[domain(audit)]
    audit: AuditInfo,
    #[domain(void)]
    void_state: VoidState,
    #[domain(attributes)]
    attributes: Vec<Attribute>,
    /// Uuid of the patient this visit belongs to
    patient: Uuid,
    /// Name of the visit type (outpatient, inpatient, ...)
    visit_type: String,
    /// When the visit began
    start: DateTime<Utc>,
    /// When the visit ended, while it is open None
    stop: Option<DateTime<Utc>>,
}

impl Visit {
    /// Open a new visit starting at the context's instant
    #[must_use]
    pub fn new(patient: Uuid, visit_type: impl Into<String>, ctx: &AuditContext) -> Self {
        Self {
            identity: Identity::new(),
            audit: AuditInfo::created(ctx),
            void_state: VoidState::default(),
            attributes: Vec::new(),
            patient,
            visit_type: visit_type.into(),
            start: ctx.now(),
            stop: None,
        }
    }

    /// The patient's uuid
    #[must_use]
    pub const fn patient(&self) -> &Uuid {
        &self.patient
    }

    /// The visit type name
    #[must_use]
    pub fn visit_type(&self) -> &str {
        &self.visit_type
    }

    /// When the visit began
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// When the visit ended, if closed
    #[must_use]
    pub const fn stop(&self) -> Option<DateTime<Utc>> {
        self.stop
    }

    /// Close the visit at the context's instant and refresh the audit trail
    pub fn close(&mut self, ctx: &AuditContext) {
        self.stop = Some(ctx.now());
        self.audit.touch(ctx);
    }
}
