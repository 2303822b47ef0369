//! # signet-license: Signed License Documents
//!
//! The license document model, issuer, verifier, and validator.
//!
//! ## Flow
//!
//! The issuing server builds a [`LicenseDocument`] (license key, issue date,
//! expiry, issuer label), canonicalizes it, signs the canonical bytes with
//! Ed25519, and embeds the resulting [`SignatureBlock`] to produce a
//! [`SignedLicense`]. The validating client parses the signed document,
//! recomputes the canonical form from the document fields alone (the
//! signature block is structurally outside them), checks the recorded digest
//! and the signature, and then checks expiry against the current time.
//!
//! ## Security Invariants
//!
//! - Signing and verification consume the same
//!   [`CanonicalBytes`](signet_core::CanonicalBytes) pipeline; there is no
//!   second serialization path that could drift.
//! - A [`SignedLicense`] is never mutated after issuance. Any change to any
//!   field, however favorable or unfavorable to the holder, invalidates the
//!   signature.
//! - Verification failure is an expected outcome, not an exception: the
//!   verifier returns `false` for tampered or wrong-key documents and
//!   reserves errors for input that cannot be parsed at all.

pub mod document;
pub mod error;
pub mod issue;
pub mod signature;
pub mod validate;
pub mod verify;

// Re-export primary types.
pub use document::{LicenseDocument, SignedLicense, DEFAULT_ISSUER};
pub use error::LicenseError;
pub use issue::LicenseIssuer;
pub use signature::{SignatureAlgorithm, SignatureBlock};
pub use validate::{validate, validate_signed, Verdict, MSG_EXPIRED, MSG_OK, MSG_TAMPERED};
pub use verify::{verify, verify_bytes};
