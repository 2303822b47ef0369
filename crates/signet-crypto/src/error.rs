//! # Cryptographic Error Types
//!
//! Structured errors for all cryptographic operations in `signet-crypto`.

use thiserror::Error;

/// Errors from cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Ed25519 signature verification failed.
    #[error("Ed25519 verification failed: {0}")]
    VerificationFailed(String),

    /// Invalid Ed25519 signature length.
    #[error("invalid Ed25519 signature length: expected 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    /// Invalid Ed25519 public key.
    #[error("invalid Ed25519 public key: {0}")]
    InvalidPublicKey(String),

    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(String),

    /// Invalid digest encoding.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),

    /// Key material could not be loaded. Issuing and validating cannot
    /// proceed without a key, so callers must treat this as fatal to the
    /// operation rather than substituting a default.
    #[error("key unavailable: {0}")]
    KeyUnavailable(String),
}
