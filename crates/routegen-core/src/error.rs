//! Error types for route generation

use thiserror::Error;

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum GenError {
    /// A parameter descriptor was constructed with inconsistent fields
    #[error("invalid descriptor '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: String },

    /// The method list or descriptor list cannot be generated from
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// Two routes render to the same external signature and collisions are denied
    #[error("signature collision for {method}: {signature}")]
    SignatureCollision { method: String, signature: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error while writing the generated document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenError {
    /// Shorthand for [`GenError::InvalidDescriptor`]
    pub fn invalid_descriptor(name: impl Into<String>, reason: impl Into<String>) -> Self {
        GenError::InvalidDescriptor {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
