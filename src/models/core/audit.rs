//! Audit trail
//!
//! Tracks who created an entity and when, and who last changed it. Creator
//! and creation instant are stamped once and never cleared; the change pair
//! is refreshed by every mutating operation. Audit fields never take part in
//! entity equality or hashing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::{AuditContext, UserRef};

/// Creation and last-change stamps for an entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditInfo {
    creator: UserRef,
    date_created: DateTime<Utc>,
    changed_by: Option<UserRef>,
    date_changed: Option<DateTime<Utc>>,
}

impl AuditInfo {
    /// Stamp a brand-new record with the acting user and instant
    #[must_use]
    pub fn created(ctx: &AuditContext) -> Self {
        Self {
            creator: ctx.user().clone(),
            date_created: ctx.now(),
            changed_by: None,
            date_changed: None,
        }
    }

    /// Reconstruct audit stamps loaded from storage
    #[must_use]
    pub const fn hydrated(
        creator: UserRef,
        date_created: DateTime<Utc>,
        changed_by: Option<UserRef>,
        date_changed: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            creator,
            date_created,
            changed_by,
            date_changed,
        }
    }

    /// The user that created the entity
    #[must_use]
    pub const fn creator(&self) -> &UserRef {
        &self.creator
    }

    /// When the entity was created
    #[must_use]
    pub const fn date_created(&self) -> DateTime<Utc> {
        self.date_created
    }

    /// The user that last changed the entity, if it has been changed
    #[must_use]
    pub const fn changed_by(&self) -> Option<&UserRef> {
        self.changed_by.as_ref()
    }

    /// When the entity was last changed
    #[must_use]
    pub const fn date_changed(&self) -> Option<DateTime<Utc>> {
        self.date_changed
    }

    /// Refresh the change stamps for a mutation
    pub fn touch(&mut self, ctx: &AuditContext) {
        self.changed_by = Some(ctx.user().clone());
        self.date_changed = Some(ctx.now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Clock, FixedClock};
    use chrono::TimeZone;

    fn ctx_at(secs: i64) -> AuditContext {
        let clock = FixedClock(Utc.timestamp_opt(secs, 0).unwrap());
        AuditContext::new(UserRef::new("tester"), &clock)
    }

    #[test]
    fn created_stamps_creator_only() {
        let ctx = ctx_at(1_000);
        let audit = AuditInfo::created(&ctx);
        assert_eq!(audit.creator(), ctx.user());
        assert_eq!(audit.date_created(), ctx.now());
        assert!(audit.changed_by().is_none());
        assert!(audit.date_changed().is_none());
    }

    #[test]
    fn touch_refreshes_change_stamps() {
        let created = ctx_at(1_000);
        let changed = ctx_at(2_000);
        let mut audit = AuditInfo::created(&created);
        audit.touch(&changed);
        assert_eq!(audit.changed_by(), Some(changed.user()));
        assert_eq!(audit.date_changed(), Some(changed.now()));
        // creation stamps are untouched
        assert_eq!(audit.date_created(), created.now());
    }

    #[test]
    fn fixed_clock_is_deterministic() {
        let clock = FixedClock(Utc.timestamp_opt(5, 0).unwrap());
        assert_eq!(clock.now(), clock.now());
    }
}
