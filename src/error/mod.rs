//! Error handling for the emr-model crate.

/// Errors raised by the domain model at the point of mutation
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A void or retire was requested without the reason the policy requires
    #[error("{operation} requires a non-blank reason")]
    MissingReason {
        /// The lifecycle operation that was attempted
        operation: &'static str,
    },

    /// A duration carried a unit code the model does not recognize
    #[error("unrecognized duration unit code: {0}")]
    UnknownDurationUnit(String),

    /// A recurring-interval duration was computed without a frequency
    #[error("recurring-interval duration requires a frequency per day")]
    MissingFrequency,

    /// Duration arithmetic left the representable time range
    #[error("duration arithmetic out of range")]
    DurationOutOfRange,

    /// An attribute type declares impossible cardinality bounds
    #[error("attribute type {name} has invalid cardinality: {detail}")]
    InvalidCardinality {
        /// Name of the offending attribute type
        name: String,
        /// What is wrong with the declared bounds
        detail: String,
    },

    /// An owner holds an active attribute count outside the declared bounds
    #[error(
        "attribute type {type_name} has {count} active value(s) outside the declared bounds (min {min_occurs}, max {max_occurs:?})"
    )]
    CardinalityViolation {
        /// Name of the attribute type whose bounds are violated
        type_name: String,
        /// Number of active attributes of that type on the owner
        count: usize,
        /// Declared minimum
        min_occurs: u32,
        /// Declared maximum, if bounded
        max_occurs: Option<u32>,
    },

    /// A raw attribute value was rejected by its datatype handler
    #[error("value rejected by datatype {descriptor}: {detail}")]
    DatatypeValidation {
        /// Descriptor of the datatype that rejected the value
        descriptor: String,
        /// Why the value was rejected
        detail: String,
    },

    /// No datatype handler is registered for a descriptor
    #[error("no datatype registered for descriptor: {0}")]
    UnknownDatatype(String),
}

/// Alias for Result with `ModelError`
pub type Result<T> = std::result::Result<T, ModelError>;
