//! Core model building blocks
//!
//! This module contains the fundamental pieces every domain entity composes:
//! identity, audit stamps, the two soft-delete state machines and the
//! capability traits over them.

pub mod audit;
pub mod identity;
pub mod lifecycle;
pub mod traits;

pub use audit::AuditInfo;
pub use identity::Identity;
pub use lifecycle::{RetireState, VoidState};
pub use traits::{Auditable, Identified, MutableAuditable, Retireable, Voidable};
