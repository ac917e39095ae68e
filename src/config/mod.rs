//! Configuration for lifecycle policy.

/// Policy knobs consulted by the lifecycle state machines
///
/// The defaults mirror production behavior: soft-deleting a record without
/// saying why is rejected at the point of mutation.
#[derive(Debug, Clone, Copy)]
pub struct LifecyclePolicy {
    /// Whether voiding requires a non-blank reason
    pub require_void_reason: bool,
    /// Whether retiring requires a non-blank reason
    pub require_retire_reason: bool,
}

impl LifecyclePolicy {
    /// A policy that accepts blank reasons for both lifecycles
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            require_void_reason: false,
            require_retire_reason: false,
        }
    }
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            require_void_reason: true,
            require_retire_reason: true,
        }
    }
}
