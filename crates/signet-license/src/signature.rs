//! # Signature Block
//!
//! The signature element embedded inside a signed license document. The
//! block has rigid structure: an algorithm identifier, the digest of the
//! canonical document bytes, and the signature value itself.
//!
//! ## Security Invariant
//!
//! The `value` field holds the hex-encoded Ed25519 signature computed over
//! the JCS-canonicalized document body, with the signature block itself
//! excluded. The recorded `digest` covers the same bytes and is
//! cross-checked during verification before the signature is examined.

use serde::{Deserialize, Serialize};
use signet_crypto::{ContentDigest, Ed25519Signature};

/// The signature scheme of a license signature block.
///
/// `Ed25519Sha256` is the only scheme license documents carry; an unknown
/// identifier on the wire fails deserialization, so a parsed block is
/// always of a supported scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureAlgorithm {
    /// Ed25519 signature over canonical bytes, SHA-256 reference digest.
    Ed25519Sha256,
}

impl std::fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureAlgorithm::Ed25519Sha256 => write!(f, "Ed25519Sha256"),
        }
    }
}

/// A signature block embedded in a signed license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureBlock {
    /// The signature scheme.
    pub algorithm: SignatureAlgorithm,

    /// SHA-256 digest of the canonical document bytes, as `sha256:<hex>`.
    pub digest: ContentDigest,

    /// Hex-encoded Ed25519 signature over the canonical document bytes
    /// (64 bytes, 128 hex characters).
    pub value: String,
}

impl SignatureBlock {
    /// Assemble a block from a freshly computed digest and signature.
    pub fn new(digest: ContentDigest, signature: &Ed25519Signature) -> Self {
        Self {
            algorithm: SignatureAlgorithm::Ed25519Sha256,
            digest,
            value: signature.to_hex(),
        }
    }
}
