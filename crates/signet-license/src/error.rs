//! # License Error Types

use signet_core::CanonicalizationError;
use thiserror::Error;

/// Errors from license document handling.
///
/// Tampering and expiry are deliberately absent here: both are ordinary
/// verdicts of validation, not errors. This enum covers only conditions
/// that prevent an operation from producing a verdict at all.
#[derive(Error, Debug)]
pub enum LicenseError {
    /// The input bytes are not a well-formed license document: not JSON,
    /// missing required fields, a timestamp outside the fixed format, or an
    /// unrecognized signature algorithm.
    #[error("malformed license document: {0}")]
    MalformedDocument(String),

    /// Canonicalization of the document body failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Serializing a license to its wire form failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
