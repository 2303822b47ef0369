//! # signet-crypto: Cryptographic Primitives
//!
//! Provides the cryptographic building blocks for Signet licensing:
//!
//! - **Ed25519** signing and verification for license signature blocks.
//! - **SHA-256 digest computation** from [`CanonicalBytes`](signet_core::CanonicalBytes),
//!   the only accepted input type.
//! - **Key files**: loading and storing hex-encoded key material, with
//!   loading failures surfaced as a distinct `KeyUnavailable` condition.
//!
//! ## Crate Policy
//!
//! - Depends only on `signet-core` internally.
//! - No mocking of cryptographic operations in tests; all tests use real
//!   `CanonicalBytes`, real SHA-256, real Ed25519.
//! - Private key material is never serialized and never printed.

pub mod digest;
pub mod ed25519;
pub mod error;
mod hex;
pub mod keyfile;

// Re-export primary types.
pub use digest::{sha256_digest, sha256_hex, ContentDigest, DigestAlgorithm};
pub use ed25519::{verify, verify_with_public_key, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
pub use error::CryptoError;
pub use keyfile::{load_keypair, load_public_key, save_keypair};
