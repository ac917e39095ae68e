//! Entity identity
//!
//! Every entity carries a process-wide unique uuid assigned at construction
//! and an optional surrogate numeric id assigned by the persistence layer on
//! first save. Entity equality and hashing derive purely from the uuid; the
//! surrogate key is a storage concern.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity pair embedded in every domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Surrogate key assigned by the persistence layer; None before first save
    id: Option<i64>,
    /// Business identity, generated at construction
    uuid: Option<Uuid>,
}

impl Identity {
    /// Identity for a newly constructed entity: fresh uuid, no surrogate key
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: None,
            uuid: Some(Uuid::new_v4()),
        }
    }

    /// Identity for an entity hydrated from storage
    ///
    /// This is the load-side construction path: the row already owns both
    /// keys, so nothing is generated and nothing is marked dirty.
    #[must_use]
    pub const fn hydrated(id: i64, uuid: Uuid) -> Self {
        Self {
            id: Some(id),
            uuid: Some(uuid),
        }
    }

    /// The surrogate key, if the entity has been saved
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// The business uuid
    #[must_use]
    pub const fn uuid(&self) -> Option<&Uuid> {
        self.uuid.as_ref()
    }

    /// Record the surrogate key assigned on first save
    ///
    /// Reassigning an already-persisted identity is a programming error.
    pub fn assign_id(&mut self, id: i64) {
        debug_assert!(self.id.is_none(), "surrogate id assigned twice");
        self.id = Some(id);
    }

    /// Replace the uuid
    ///
    /// Only meaningful before the entity is persisted; the uuid is immutable
    /// once saved.
    pub fn set_uuid(&mut self, uuid: Uuid) {
        debug_assert!(self.id.is_none(), "uuid changed after persistence");
        self.uuid = Some(uuid);
    }

    /// True when both identities carry the same non-absent uuid
    #[must_use]
    pub fn same_entity(&self, other: &Self) -> bool {
        match (&self.uuid, &other.uuid) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_identity_has_uuid_but_no_id() {
        let identity = Identity::new();
        assert!(identity.uuid().is_some());
        assert!(identity.id().is_none());
    }

    #[test]
    fn hydrated_identity_keeps_both_keys() {
        let uuid = Uuid::new_v4();
        let identity = Identity::hydrated(42, uuid);
        assert_eq!(identity.id(), Some(42));
        assert_eq!(identity.uuid(), Some(&uuid));
    }

    #[test]
    fn same_entity_compares_uuids() {
        let uuid = Uuid::new_v4();
        let a = Identity::hydrated(1, uuid);
        let b = Identity::hydrated(2, uuid);
        assert!(a.same_entity(&b));
        assert!(!a.same_entity(&Identity::new()));
    }
}
