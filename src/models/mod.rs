//! Domain models for the record platform
//!
//! This module contains the core building blocks every entity composes
//! (identity, audit, lifecycle), the extensible-attribute model, duration
//! arithmetic and the concrete entities that exercise the composition.

pub mod attribute;
pub mod core;
pub mod duration;
pub mod location;
pub mod visit;

// Re-export commonly used types
pub use attribute::{Attribute, AttributeType, Customizable};
pub use core::{
    AuditInfo, Auditable, Identified, Identity, MutableAuditable, RetireState, Retireable,
    VoidState, Voidable,
};
pub use duration::{Duration, DurationUnit};
pub use location::Location;
pub use visit::Visit;
