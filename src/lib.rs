//! Domain-model core for an electronic health record platform: entity
//! identity, audit trails, the void/retire soft-delete lifecycles, a
//! type-safe extensible-attribute mechanism and duration arithmetic.
//!
//! Persistence, search indexing, authorization and localization live
//! elsewhere; this crate reaches them only through narrow collaborator
//! interfaces ([`context::Clock`], [`datatype::AttributeDatatype`]) and the
//! acting user is always passed in explicitly via [`context::AuditContext`].

pub mod config;
pub mod context;
pub mod datatype;
pub mod error;
pub mod models;

// Re-export the most common types for easier use
// Core types
pub use config::LifecyclePolicy;
pub use context::{AuditContext, Clock, FixedClock, SystemClock, UserRef};
pub use error::{ModelError, Result};

// Entity building blocks
pub use models::core::{
    AuditInfo, Auditable, Identified, Identity, MutableAuditable, RetireState, Retireable,
    VoidState, Voidable,
};

// Extensible attributes
pub use datatype::{AttributeDatatype, DatatypeRegistry, FreeTextDatatype, JsonDatatype};
pub use models::attribute::{Attribute, AttributeType, Customizable};

// Duration arithmetic and concrete entities
pub use models::duration::{Duration, DurationUnit};
pub use models::location::Location;
pub use models::visit::Visit;
