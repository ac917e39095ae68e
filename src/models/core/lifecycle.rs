//! Void and retire lifecycle state machines
//!
//! Two parallel soft-delete mechanisms: voiding for transactional data,
//! retirement for reference metadata. Retirement blocks future selection but
//! leaves historical references intact; voiding is expected to be cascaded to
//! dependents by a higher-level service, never by this crate.
//!
//! All four fields of either state transition together: an entity is never
//! half-voided. Re-voiding an already voided entity is a silent no-op that
//! preserves the original metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::{AuditContext, UserRef};
use crate::error::{ModelError, Result};

/// Soft-delete state for transactional data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoidState {
    voided: bool,
    voided_by: Option<UserRef>,
    date_voided: Option<DateTime<Utc>>,
    void_reason: Option<String>,
}

impl VoidState {
    /// Reconstruct void state loaded from storage
    #[must_use]
    pub const fn hydrated(
        voided: bool,
        voided_by: Option<UserRef>,
        date_voided: Option<DateTime<Utc>>,
        void_reason: Option<String>,
    ) -> Self {
        Self {
            voided,
            voided_by,
            date_voided,
            void_reason,
        }
    }

    /// Whether the record is voided
    #[must_use]
    pub const fn is_voided(&self) -> bool {
        self.voided
    }

    /// The user that voided the record
    #[must_use]
    pub const fn voided_by(&self) -> Option<&UserRef> {
        self.voided_by.as_ref()
    }

    /// When the record was voided
    #[must_use]
    pub const fn date_voided(&self) -> Option<DateTime<Utc>> {
        self.date_voided
    }

    /// Why the record was voided
    #[must_use]
    pub fn void_reason(&self) -> Option<&str> {
        self.void_reason.as_deref()
    }

    /// Void the record, stamping all four fields in one step
    ///
    /// A no-op when already voided: the original void metadata is preserved.
    pub fn void(&mut self, reason: &str, ctx: &AuditContext) -> Result<()> {
        if self.voided {
            return Ok(());
        }
        if ctx.policy().require_void_reason && reason.trim().is_empty() {
            return Err(ModelError::MissingReason { operation: "void" });
        }
        self.voided = true;
        self.voided_by = Some(ctx.user().clone());
        self.date_voided = Some(ctx.now());
        self.void_reason = Some(reason.to_string());
        log::debug!("voided by {}: {reason}", ctx.user().display_name());
        Ok(())
    }

    /// Reset all four void fields together; a no-op when not voided
    pub fn unvoid(&mut self) {
        if !self.voided {
            return;
        }
        self.voided = false;
        self.voided_by = None;
        self.date_voided = None;
        self.void_reason = None;
        log::debug!("unvoided");
    }
}

/// Soft-delete state for reference metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetireState {
    retired: bool,
    retired_by: Option<UserRef>,
    date_retired: Option<DateTime<Utc>>,
    retire_reason: Option<String>,
}

impl RetireState {
    /// Reconstruct retire state loaded from storage
    #[must_use]
    pub const fn hydrated(
        retired: bool,
        retired_by: Option<UserRef>,
        date_retired: Option<DateTime<Utc>>,
        retire_reason: Option<String>,
    ) -> Self {
        Self {
            retired,
            retired_by,
            date_retired,
            retire_reason,
        }
    }

    /// Whether the metadata is retired
    #[must_use]
    pub const fn is_retired(&self) -> bool {
        self.retired
    }

    /// The user that retired the metadata
    #[must_use]
    pub const fn retired_by(&self) -> Option<&UserRef> {
        self.retired_by.as_ref()
    }

    /// When the metadata was retired
    #[must_use]
    pub const fn date_retired(&self) -> Option<DateTime<Utc>> {
        self.date_retired
    }

    /// Why the metadata was retired
    #[must_use]
    pub fn retire_reason(&self) -> Option<&str> {
        self.retire_reason.as_deref()
    }

    /// Retire the metadata, stamping all four fields in one step
    ///
    /// A no-op when already retired: the original metadata is preserved.
    pub fn retire(&mut self, reason: &str, ctx: &AuditContext) -> Result<()> {
        if self.retired {
            return Ok(());
        }
        if ctx.policy().require_retire_reason && reason.trim().is_empty() {
            return Err(ModelError::MissingReason {
                operation: "retire",
            });
        }
        self.retired = true;
        self.retired_by = Some(ctx.user().clone());
        self.date_retired = Some(ctx.now());
        self.retire_reason = Some(reason.to_string());
        log::debug!("retired by {}: {reason}", ctx.user().display_name());
        Ok(())
    }

    /// Reset all four retire fields together; a no-op when not retired
    pub fn unretire(&mut self) {
        if !self.retired {
            return;
        }
        self.retired = false;
        self.retired_by = None;
        self.date_retired = None;
        self.retire_reason = None;
        log::debug!("unretired");
    }
}
