//! Attribute datatype collaborator
//!
//! Attribute values are opaque to the model: an [`AttributeType`] names its
//! datatype by descriptor string, and a handler resolved through the
//! [`DatatypeRegistry`] validates raw input and produces the canonical
//! serialized form stored on the attribute. The model calls the handler at
//! the attach boundary and never reimplements validation.
//!
//! [`AttributeType`]: crate::models::attribute::AttributeType

use rustc_hash::FxHashMap;

use crate::error::{ModelError, Result};

/// A handler that validates raw attribute values for one datatype
pub trait AttributeDatatype {
    /// The descriptor string this handler is registered under
    fn descriptor(&self) -> &str;

    /// Validate a raw value, returning its canonical serialized form
    fn validate(&self, raw: &str) -> Result<String>;
}

/// Accepts any non-empty text verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeTextDatatype;

impl AttributeDatatype for FreeTextDatatype {
    fn descriptor(&self) -> &str {
        "free-text"
    }

    fn validate(&self, raw: &str) -> Result<String> {
        if raw.trim().is_empty() {
            return Err(ModelError::DatatypeValidation {
                descriptor: self.descriptor().to_string(),
                detail: "value must not be blank".to_string(),
            });
        }
        Ok(raw.to_string())
    }
}

/// Accepts values that parse as JSON, storing the compact serialization
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDatatype;

impl AttributeDatatype for JsonDatatype {
    fn descriptor(&self) -> &str {
        "json"
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| ModelError::DatatypeValidation {
                descriptor: self.descriptor().to_string(),
                detail: e.to_string(),
            })?;
        // Canonical form so value equality is insensitive to whitespace.
        serde_json::to_string(&value).map_err(|e| ModelError::DatatypeValidation {
            descriptor: self.descriptor().to_string(),
            detail: e.to_string(),
        })
    }
}

/// Registry resolving datatype descriptors to handlers
pub struct DatatypeRegistry {
    handlers: FxHashMap<String, Box<dyn AttributeDatatype>>,
}

impl DatatypeRegistry {
    /// An empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// A registry preloaded with the built-in handlers
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(FreeTextDatatype));
        registry.register(Box::new(JsonDatatype));
        registry
    }

    /// Register a handler under its descriptor, replacing any previous one
    pub fn register(&mut self, handler: Box<dyn AttributeDatatype>) {
        self.handlers
            .insert(handler.descriptor().to_string(), handler);
    }

    /// Resolve a descriptor to its handler
    pub fn resolve(&self, descriptor: &str) -> Result<&dyn AttributeDatatype> {
        self.handlers
            .get(descriptor)
            .map(|handler| &**handler)
            .ok_or_else(|| ModelError::UnknownDatatype(descriptor.to_string()))
    }
}

impl Default for DatatypeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for DatatypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatatypeRegistry")
            .field("descriptors", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_rejects_blank() {
        let datatype = FreeTextDatatype;
        assert!(datatype.validate("  ").is_err());
        assert_eq!(datatype.validate("O+").unwrap(), "O+");
    }

    #[test]
    fn json_canonicalizes_whitespace() {
        let datatype = JsonDatatype;
        let a = datatype.validate(r#"{"a": 1}"#).unwrap();
        let b = datatype.validate(r#"{ "a" :1 }"#).unwrap();
        assert_eq!(a, b);
        assert!(datatype.validate("not json").is_err());
    }

    #[test]
    fn registry_resolves_known_descriptors() {
        let registry = DatatypeRegistry::with_defaults();
        assert!(registry.resolve("free-text").is_ok());
        assert!(registry.resolve("json").is_ok());
        match registry.resolve("hl7-cwe") {
            Err(ModelError::UnknownDatatype(descriptor)) => assert_eq!(descriptor, "hl7-cwe"),
            Err(other) => panic!("expected UnknownDatatype, got {other:?}"),
            Ok(_) => panic!("expected UnknownDatatype, got a handler"),
        }
    }
}
