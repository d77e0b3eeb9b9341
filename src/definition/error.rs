//! Definition error types.

use crate::core::ValidationError;
use thiserror::Error;

/// Errors that can occur while saving or loading a definition
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Definition version is not supported by this version
    #[error("Unsupported definition version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The same transition input appears more than once
    #[error("Duplicate transition from state {state} on symbol {symbol}")]
    DuplicateTransition { state: String, symbol: String },

    /// The definition does not describe a valid automaton
    #[error("Invalid automaton: {0}")]
    Invalid(#[from] ValidationError),
}
