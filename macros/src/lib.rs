//! Procedural macros for the emr-model crate
//!
//! This crate provides a derive macro that generates the capability-trait
//! boilerplate for domain entities, significantly reducing repetition in the
//! emr-model crate.

use proc_macro::TokenStream;

// Import modules
mod domain_object;

// Tests
#[cfg(test)]
mod tests;

/// `DomainObject` derive macro
///
/// Generates the `Identified` implementation and uuid-based equality/hash for
/// a domain entity, plus delegating implementations for the lifecycle
/// capabilities whose backing fields are marked with `#[domain(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(DomainObject)]
/// struct Visit {
///     #[domain(identity)]
///     identity: Identity,
///
///     #[domain(audit)]
///     audit: AuditInfo,
///
///     #[domain(void)]
///     void_state: VoidState,
///
///     #[domain(attributes)]
///     attributes: Vec<Attribute>,
///
///     visit_type: String,
/// }
/// ```
///
/// The `identity` marker is mandatory. Equality is uuid-based: two entities
/// are equal when they are the same reference or carry the same non-absent
/// uuid; audit and lifecycle fields never participate in equality or hashing.
#[proc_macro_derive(DomainObject, attributes(domain))]
pub fn derive_domain_object(input: TokenStream) -> TokenStream {
    domain_object::process_derive_domain_object(input)
}
