//! # Content Digests
//!
//! SHA-256 digests of canonical license bytes, carried inside the signature
//! block as a self-describing `sha256:<hex>` string.
//!
//! ## Security Invariant
//!
//! [`sha256_digest()`] accepts only `&CanonicalBytes`. It is a compile error
//! to hash raw bytes, so every digest in a license was computed over the
//! shared canonical form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use signet_core::CanonicalBytes;

use crate::error::CryptoError;
use crate::hex::{bytes_to_hex, hex_to_bytes};

/// The hash algorithm used to produce a content digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// SHA-256, the only algorithm license signature blocks carry.
    Sha256,
}

impl DigestAlgorithm {
    /// The algorithm identifier string used in the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }

    /// Parse an algorithm identifier.
    pub fn parse(s: &str) -> Result<Self, CryptoError> {
        match s {
            "sha256" => Ok(Self::Sha256),
            other => Err(CryptoError::InvalidDigest(format!(
                "unknown digest algorithm: {other:?}"
            ))),
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content digest with its algorithm tag.
///
/// Wire form is the string `sha256:<64 hex chars>`; the serde
/// implementations below read and write exactly that shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest {
    /// The hash algorithm that produced this digest.
    pub algorithm: DigestAlgorithm,
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Create a content digest from raw bytes and algorithm.
    ///
    /// Prefer [`sha256_digest()`] for digests of canonical bytes.
    pub fn new(algorithm: DigestAlgorithm, bytes: [u8; 32]) -> Self {
        Self { algorithm, bytes }
    }

    /// Render the digest value as a lowercase hex string (no algorithm tag).
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.bytes)
    }

    /// Parse a `sha256:<hex>` string.
    pub fn parse(s: &str) -> Result<Self, CryptoError> {
        let (alg, hex) = s
            .split_once(':')
            .ok_or_else(|| CryptoError::InvalidDigest(format!("missing algorithm tag: {s:?}")))?;
        let algorithm = DigestAlgorithm::parse(alg)?;
        if hex.len() != 64 {
            return Err(CryptoError::InvalidDigest(format!(
                "digest hex must be 64 chars, got {}",
                hex.len()
            )));
        }
        let raw = hex_to_bytes(hex).map_err(CryptoError::InvalidDigest)?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&raw);
        Ok(Self { algorithm, bytes })
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

impl Serialize for ContentDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ContentDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute a SHA-256 content digest from canonical bytes.
///
/// This is the digest recorded in (and checked against) every license
/// signature block.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest::new(DigestAlgorithm::Sha256, bytes)
}

/// Compute a SHA-256 hex string from canonical bytes.
pub fn sha256_hex(data: &CanonicalBytes) -> String {
    sha256_digest(data).to_hex()
}
