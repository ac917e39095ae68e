//! Capability traits for domain entities
//!
//! Each capability is an independent trait over an embedded state struct,
//! and concrete entities compose exactly the capabilities they need; there
//! is no base-entity type that everything inherits from.
//! The `DomainObject` derive in the `macros` crate generates the delegating
//! implementations from `#[domain(...)]`-marked fields.

use uuid::Uuid;

use crate::context::AuditContext;
use crate::error::Result;
use crate::models::core::audit::AuditInfo;
use crate::models::core::identity::Identity;
use crate::models::core::lifecycle::{RetireState, VoidState};

/// An entity with uuid-based identity and an optional surrogate key
pub trait Identified {
    /// The embedded identity pair
    fn identity(&self) -> &Identity;

    /// Mutable access for the persistence layer
    fn identity_mut(&mut self) -> &mut Identity;

    /// The entity's business uuid
    fn uuid(&self) -> Option<&Uuid> {
        self.identity().uuid()
    }

    /// The surrogate key, if the entity has been saved
    fn id(&self) -> Option<i64> {
        self.identity().id()
    }
}

/// Read-only view of an entity's audit trail
pub trait Auditable {
    /// The embedded audit stamps
    fn audit(&self) -> &AuditInfo;
}

/// The mutable audit variant, chosen at the entity level
///
/// Immutable records implement only [`Auditable`]; everything that accepts
/// mutation after creation also implements this trait and refreshes its
/// change stamps through [`touch`](MutableAuditable::touch).
pub trait MutableAuditable: Auditable {
    /// Mutable access to the audit stamps
    fn audit_mut(&mut self) -> &mut AuditInfo;

    /// Record who performed a mutation and when
    fn touch(&mut self, ctx: &AuditContext) {
        self.audit_mut().touch(ctx);
    }
}

/// Soft-delete capability for transactional data
pub trait Voidable {
    /// The embedded void state
    fn void_state(&self) -> &VoidState;

    /// Mutable access to the void state
    fn void_state_mut(&mut self) -> &mut VoidState;

    /// Whether the record is voided
    fn is_voided(&self) -> bool {
        self.void_state().is_voided()
    }

    /// Void the record; idempotent on an already-voided record
    fn void(&mut self, reason: &str, ctx: &AuditContext) -> Result<()> {
        self.void_state_mut().void(reason, ctx)
    }

    /// Clear all void fields together; a no-op when not voided
    fn unvoid(&mut self) {
        self.void_state_mut().unvoid();
    }
}

/// Soft-delete capability for reference metadata
pub trait Retireable {
    /// The embedded retire state
    fn retire_state(&self) -> &RetireState;

    /// Mutable access to the retire state
    fn retire_state_mut(&mut self) -> &mut RetireState;

    /// Whether the metadata is retired
    fn is_retired(&self) -> bool {
        self.retire_state().is_retired()
    }

    /// Retire the metadata; idempotent on already-retired metadata
    fn retire(&mut self, reason: &str, ctx: &AuditContext) -> Result<()> {
        self.retire_state_mut().retire(reason, ctx)
    }

    /// Clear all retire fields together; a no-op when not retired
    fn unretire(&mut self) {
        self.retire_state_mut().unretire();
    }
}
