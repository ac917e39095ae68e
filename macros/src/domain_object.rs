//! DomainObject derive macro implementation
//!
//! This module contains the implementation of the `DomainObject` derive
//! macro, which generates the `Identified` trait implementation, uuid-based
//! equality and hashing, and delegating implementations for the lifecycle
//! capability traits of the emr-model crate.

use darling::util::Flag;
use darling::{FromDeriveInput, FromField, ast};
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Receiver for the struct that derives `DomainObject`
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(domain), supports(struct_named))]
pub(crate) struct DomainObjectReceiver {
    /// The struct identifier
    ident: syn::Ident,
    /// The struct data with parsed fields
    data: ast::Data<(), DomainFieldReceiver>,
}

#[cfg(test)]
impl DomainObjectReceiver {
    /// Access the parsed fields (used by the receiver tests)
    pub(crate) fn fields(&self) -> Vec<&DomainFieldReceiver> {
        match &self.data {
            ast::Data::Struct(fields) => fields.iter().collect(),
            ast::Data::Enum(_) => Vec::new(),
        }
    }
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(attributes(domain))]
pub(crate) struct DomainFieldReceiver {
    /// The field identifier
    pub(crate) ident: Option<syn::Ident>,
    /// Field backing the entity identity (uuid + surrogate id)
    #[darling(default)]
    pub(crate) identity: Flag,
    /// Field backing the audit trail
    #[darling(default)]
    pub(crate) audit: Flag,
    /// Field backing the void lifecycle state
    #[darling(default)]
    pub(crate) void: Flag,
    /// Field backing the retire lifecycle state
    #[darling(default)]
    pub(crate) retire: Flag,
    /// Field backing the extension-attribute collection
    #[darling(default)]
    pub(crate) attributes: Flag,
}

/// Process the DomainObject derive macro
pub fn process_derive_domain_object(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // Parse with darling
    let receiver = match DomainObjectReceiver::from_derive_input(&input) {
        Ok(receiver) => receiver,
        Err(err) => return err.write_errors().into(),
    };

    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };

    let struct_name = &receiver.ident;

    let Some(identity_field) = marked_field(fields, |f| f.identity.is_present()) else {
        return syn::Error::new(
            struct_name.span(),
            "DomainObject requires a field marked #[domain(identity)]",
        )
        .to_compile_error()
        .into();
    };

    let mut expanded = generate_identity_impl(struct_name, identity_field);

    if let Some(field) = marked_field(fields, |f| f.audit.is_present()) {
        expanded.extend(generate_audit_impl(struct_name, field));
    }
    if let Some(field) = marked_field(fields, |f| f.void.is_present()) {
        expanded.extend(generate_void_impl(struct_name, field));
    }
    if let Some(field) = marked_field(fields, |f| f.retire.is_present()) {
        expanded.extend(generate_retire_impl(struct_name, field));
    }
    if let Some(field) = marked_field(fields, |f| f.attributes.is_present()) {
        expanded.extend(generate_customizable_impl(struct_name, field));
    }

    TokenStream::from(expanded)
}

/// Find the identifier of the first field matching a marker predicate
fn marked_field<'a>(
    fields: &'a ast::Fields<DomainFieldReceiver>,
    predicate: impl Fn(&DomainFieldReceiver) -> bool,
) -> Option<&'a syn::Ident> {
    fields
        .iter()
        .find(|field| predicate(field))
        .and_then(|field| field.ident.as_ref())
}

/// Generate the `Identified` implementation plus uuid-based equality/hash
fn generate_identity_impl(
    struct_name: &syn::Ident,
    field: &syn::Ident,
) -> proc_macro2::TokenStream {
    quote! {
        impl crate::models::core::Identified for #struct_name {
            fn identity(&self) -> &crate::models::core::Identity {
                &self.#field
            }

            fn identity_mut(&mut self) -> &mut crate::models::core::Identity {
                &mut self.#field
            }
        }

        impl ::core::cmp::PartialEq for #struct_name {
            fn eq(&self, other: &Self) -> bool {
                if ::core::ptr::eq(self, other) {
                    return true;
                }
                match (self.#field.uuid(), other.#field.uuid()) {
                    (Some(a), Some(b)) => a == b,
                    // An instance without a uuid is equal only to itself.
                    _ => false,
                }
            }
        }

        impl ::core::cmp::Eq for #struct_name {}

        impl ::core::hash::Hash for #struct_name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.#field.uuid(), state);
            }
        }
    }
}

/// Generate the `Auditable` and `MutableAuditable` implementations
fn generate_audit_impl(struct_name: &syn::Ident, field: &syn::Ident) -> proc_macro2::TokenStream {
    quote! {
        impl crate::models::core::Auditable for #struct_name {
            fn audit(&self) -> &crate::models::core::AuditInfo {
                &self.#field
            }
        }

        impl crate::models::core::MutableAuditable for #struct_name {
            fn audit_mut(&mut self) -> &mut crate::models::core::AuditInfo {
                &mut self.#field
            }
        }
    }
}

/// Generate the `Voidable` implementation
fn generate_void_impl(struct_name: &syn::Ident, field: &syn::Ident) -> proc_macro2::TokenStream {
    quote! {
        impl crate::models::core::Voidable for #struct_name {
            fn void_state(&self) -> &crate::models::core::VoidState {
                &self.#field
            }

            fn void_state_mut(&mut self) -> &mut crate::models::core::VoidState {
                &mut self.#field
            }
        }
    }
}

/// Generate the `Retireable` implementation
fn generate_retire_impl(struct_name: &syn::Ident, field: &syn::Ident) -> proc_macro2::TokenStream {
    quote! {
        impl crate::models::core::Retireable for #struct_name {
            fn retire_state(&self) -> &crate::models::core::RetireState {
                &self.#field
            }

            fn retire_state_mut(&mut self) -> &mut crate::models::core::RetireState {
                &mut self.#field
            }
        }
    }
}

/// Generate the `Customizable` implementation
fn generate_customizable_impl(
    struct_name: &syn::Ident,
    field: &syn::Ident,
) -> proc_macro2::TokenStream {
    quote! {
        impl crate::models::attribute::Customizable for #struct_name {
            fn attributes(&self) -> &[crate::models::attribute::Attribute] {
                &self.#field
            }

            fn attributes_mut(&mut self) -> &mut Vec<crate::models::attribute::Attribute> {
                &mut self.#field
            }
        }
    }
}
