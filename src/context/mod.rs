//! Collaborator seams for the domain model
//!
//! The model never reads ambient state: the acting user and the current
//! instant are supplied explicitly through an [`AuditContext`] built from a
//! [`Clock`]. Tests inject a [`FixedClock`] for deterministic timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::LifecyclePolicy;

/// Source of "now" for all timestamp fields
pub trait Clock {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a single instant, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Reference to the acting user stamped into audit and lifecycle fields
///
/// Equality is uuid-based; the display name is carried for log output only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    uuid: Uuid,
    display_name: String,
}

impl UserRef {
    /// Create a user reference with a fresh uuid
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            display_name: display_name.into(),
        }
    }

    /// Reconstruct a user reference loaded from storage
    #[must_use]
    pub fn hydrated(uuid: Uuid, display_name: impl Into<String>) -> Self {
        Self {
            uuid,
            display_name: display_name.into(),
        }
    }

    /// The user's uuid
    #[must_use]
    pub const fn uuid(&self) -> &Uuid {
        &self.uuid
    }

    /// The user's display name
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl PartialEq for UserRef {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for UserRef {}

/// The acting user, the current instant and the lifecycle policy for one
/// logical transaction
///
/// Every mutating operation on the model takes an `AuditContext`; nothing in
/// the model looks up the current user or the current time on its own.
#[derive(Debug, Clone)]
pub struct AuditContext {
    user: UserRef,
    now: DateTime<Utc>,
    policy: LifecyclePolicy,
}

impl AuditContext {
    /// Build a context for the given user at the clock's current instant
    #[must_use]
    pub fn new(user: UserRef, clock: &dyn Clock) -> Self {
        Self {
            user,
            now: clock.now(),
            policy: LifecyclePolicy::default(),
        }
    }

    /// Replace the lifecycle policy
    #[must_use]
    pub const fn with_policy(mut self, policy: LifecyclePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The acting user
    #[must_use]
    pub const fn user(&self) -> &UserRef {
        &self.user
    }

    /// The instant stamped into audit and lifecycle fields
    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// The lifecycle policy in force
    #[must_use]
    pub const fn policy(&self) -> &LifecyclePolicy {
        &self.policy
    }
}
