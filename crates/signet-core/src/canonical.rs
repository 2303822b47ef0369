//! # Canonical Serialization
//!
//! Defines `CanonicalBytes`, the sole construction path for the bytes that
//! get hashed and signed anywhere in Signet.
//!
//! ## Security Invariant
//!
//! The `CanonicalBytes` newtype has a private inner field. The only way to
//! construct it is through `CanonicalBytes::new()`, which rejects float
//! values and then serializes via RFC 8785 (JSON Canonicalization Scheme):
//! sorted keys, compact separators, deterministic byte sequence.
//!
//! Any function that hashes or signs license data must accept
//! `&CanonicalBytes`, and the only way to produce one is through this
//! constructor. The classic failure mode of enveloped signatures, where the
//! issuing side and the verifying side canonicalize slightly differently and
//! every signature silently fails to verify, is therefore unrepresentable:
//! both sides call the same function because no other path exists.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - No float values anywhere in the serialized tree.
/// - Serialization uses sorted keys with compact separators (RFC 8785).
///
/// The inner `Vec<u8>` is private, so downstream code cannot violate these
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::FloatRejected` if the value contains
    /// a float, or `CanonicalizationError::SerializationFailed` if JCS
    /// serialization fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        Self::from_value(value)
    }

    /// Construct canonical bytes from an already-built JSON value.
    ///
    /// Useful when a caller has to drop a subtree (such as an embedded
    /// signature element) before canonicalizing.
    pub fn from_value(value: Value) -> Result<Self, CanonicalizationError> {
        reject_floats(&value)?;
        let s = serde_jcs::to_string(&value)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for hashing or signing.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Walk a JSON value and reject any float that is not representable as an
/// integer. License documents are composed of strings only, so a float
/// anywhere signals a payload this pipeline was never meant to sign.
fn reject_floats(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(n) => {
            if n.is_f64() && !n.is_i64() && !n.is_u64() {
                if let Some(f) = n.as_f64() {
                    return Err(CanonicalizationError::FloatRejected(f));
                }
            }
            Ok(())
        }
        Value::Object(map) => {
            for v in map.values() {
                reject_floats(v)?;
            }
            Ok(())
        }
        Value::Array(arr) => {
            for v in arr {
                reject_floats(v)?;
            }
            Ok(())
        }
    }
}
