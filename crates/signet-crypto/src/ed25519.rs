//! # Ed25519 Signing and Verification
//!
//! Key generation, signing, and verification for license signature blocks.
//!
//! ## Security Invariant
//!
//! - Signing input MUST be `&CanonicalBytes`. You cannot sign raw bytes, so
//!   every signature in the system covers data that went through the shared
//!   canonicalization pipeline.
//! - Private keys are never serialized or logged. `Ed25519KeyPair` does not
//!   implement `Serialize`, and its `Debug` output is redacted.
//!
//! ## Serde
//!
//! Public keys and signatures serialize as lowercase hex strings.

use ed25519_dalek::{Signer, Verifier};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use signet_core::CanonicalBytes;

use crate::error::CryptoError;
use crate::hex::{bytes_to_hex, hex_prefix, hex_to_bytes};

/// An Ed25519 public key (32 bytes) for signature verification.
///
/// Serializes as a 64-character hex string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey(pub [u8; 32]);

/// An Ed25519 signature (64 bytes).
///
/// Serializes as a 128-character hex string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ed25519Signature(pub [u8; 64]);

/// An Ed25519 key pair for license issuance.
///
/// Does not implement `Serialize`: private keys must not leak into logs,
/// documents, or other artifacts. The seed is exposed only through
/// [`Ed25519KeyPair::to_seed_bytes()`] for key-file storage.
pub struct Ed25519KeyPair {
    signing_key: ed25519_dalek::SigningKey,
}

// ---------------------------------------------------------------------------
// Ed25519PublicKey impls
// ---------------------------------------------------------------------------

impl Ed25519PublicKey {
    /// Create a public key from raw 32 bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw 32-byte public key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() != 64 {
            return Err(CryptoError::InvalidPublicKey(format!(
                "public key hex must be 64 chars, got {}",
                hex.len()
            )));
        }
        let bytes = hex_to_bytes(&hex).map_err(CryptoError::HexDecode)?;
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Convert to an `ed25519_dalek::VerifyingKey` for verification.
    pub fn to_verifying_key(&self) -> Result<ed25519_dalek::VerifyingKey, CryptoError> {
        ed25519_dalek::VerifyingKey::from_bytes(&self.0)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))
    }
}

impl Serialize for Ed25519PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Ed25519PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519PublicKey({}...)", hex_prefix(&self.0))
    }
}

impl std::fmt::Display for Ed25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Ed25519Signature impls
// ---------------------------------------------------------------------------

impl Ed25519Signature {
    /// Create a signature from raw 64 bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// The raw 64-byte signature.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Render as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Parse from a 128-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.trim().to_lowercase();
        let bytes = hex_to_bytes(&hex).map_err(CryptoError::HexDecode)?;
        if bytes.len() != 64 {
            return Err(CryptoError::InvalidSignatureLength(bytes.len()));
        }
        let mut arr = [0u8; 64];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl Serialize for Ed25519Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Ed25519Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519Signature({}...)", hex_prefix(&self.0))
    }
}

impl std::fmt::Display for Ed25519Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Ed25519KeyPair impls
// ---------------------------------------------------------------------------

impl Ed25519KeyPair {
    /// Generate a new random Ed25519 key pair.
    pub fn generate() -> Self {
        let mut csprng = rand::rngs::OsRng;
        let signing_key = ed25519_dalek::SigningKey::generate(&mut csprng);
        Self { signing_key }
    }

    /// Create a key pair from a raw 32-byte private key seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// The public half of this key pair.
    pub fn public_key(&self) -> Ed25519PublicKey {
        let vk = self.signing_key.verifying_key();
        Ed25519PublicKey(vk.to_bytes())
    }

    /// The raw private key seed.
    ///
    /// Exists solely so a key-file store can persist the key. Callers must
    /// not log, display, or serialize the returned bytes anywhere else.
    pub fn to_seed_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }

    /// Sign canonical bytes.
    ///
    /// The parameter type enforces that everything signed has been through
    /// the shared canonicalization pipeline; the verifying side recomputes
    /// the same bytes with the same function.
    pub fn sign(&self, data: &CanonicalBytes) -> Ed25519Signature {
        let sig = self.signing_key.sign(data.as_bytes());
        Ed25519Signature(sig.to_bytes())
    }
}

impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519KeyPair(<private>)")
    }
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Verify an Ed25519 signature over canonical bytes.
///
/// Returns `Ok(())` if valid, `Err(CryptoError::VerificationFailed)`
/// otherwise. The message parameter is `&CanonicalBytes`, so only data that
/// went through the shared canonicalization pipeline can be checked.
pub fn verify(
    data: &CanonicalBytes,
    signature: &Ed25519Signature,
    verifying_key: &ed25519_dalek::VerifyingKey,
) -> Result<(), CryptoError> {
    let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying_key
        .verify(data.as_bytes(), &sig)
        .map_err(|e| CryptoError::VerificationFailed(format!("Ed25519 verification failed: {e}")))
}

/// Convenience verification using [`Ed25519PublicKey`] instead of a dalek key.
pub fn verify_with_public_key(
    data: &CanonicalBytes,
    signature: &Ed25519Signature,
    public_key: &Ed25519PublicKey,
) -> Result<(), CryptoError> {
    let vk = public_key.to_verifying_key()?;
    verify(data, signature, &vk)
}
