//! Error types for qatonic-domain

/// Result type for qatonic-domain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in qatonic-domain operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Qualifier input does not form a valid (group, name) pair
    #[error("Invalid qualifier {input:?}: {message}")]
    InvalidQualifier { input: String, message: String },

    /// Command descriptor is not a JSON object
    #[error("Command descriptor must be a JSON object")]
    CommandNotAnObject,

    /// Command descriptor lacks a required field
    #[error("Command descriptor is missing required field {field:?}")]
    MissingField { field: &'static str },

    /// A required field is present but has the wrong type
    #[error("Command field {field:?} must be a string")]
    FieldNotAString { field: &'static str },
}
