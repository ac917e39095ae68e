//! Extensible-attribute (EAV) model
//!
//! Administrator-defined [`AttributeType`]s describe extension fields;
//! [`Attribute`]s are typed value instances attached to an owner; the
//! [`Customizable`] capability carries the attach/replace algorithm and the
//! cardinality checks.

pub mod attribute;
pub mod attribute_type;
pub mod customizable;

pub use attribute::Attribute;
pub use attribute_type::AttributeType;
pub use customizable::Customizable;
