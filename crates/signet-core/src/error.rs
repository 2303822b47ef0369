//! # Error Types
//!
//! Structured errors for the foundational types. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations. Their
    /// textual rendering is not stable across serializers, so a document
    /// containing one cannot have a reproducible canonical form.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error parsing a license timestamp.
#[derive(Error, Debug)]
pub enum TimestampError {
    /// The input does not match the fixed `DD/MM/YYYY HH:MM:SS` format.
    #[error("invalid timestamp {input:?}: expected DD/MM/YYYY HH:MM:SS ({reason})")]
    InvalidFormat {
        /// The rejected input string.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
}
