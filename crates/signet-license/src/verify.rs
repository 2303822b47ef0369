//! # Signature Verification
//!
//! The cryptographic authenticity check, with no expiry logic. Expiry is
//! layered on top by [`validate`](crate::validate::validate).
//!
//! Verification recomputes the canonical form from the document fields (the
//! signature block is structurally outside them, so no stripping step can
//! be botched), cross-checks the digest recorded in the block, and then
//! checks the Ed25519 signature.
//!
//! Ordinary failure is `false`, not an error: tampering is an expected
//! outcome of running a verifier. Only input that cannot be parsed at all
//! is reported as [`MalformedDocument`](crate::error::LicenseError).

use signet_crypto::{sha256_digest, verify_with_public_key, Ed25519PublicKey, Ed25519Signature};

use crate::document::SignedLicense;
use crate::error::LicenseError;

/// Check the signature of a parsed license against a public key.
///
/// Returns `true` only if all of the following hold:
/// - a signature block is present,
/// - the document canonicalizes,
/// - the digest recorded in the block matches the recomputed digest,
/// - the signature value decodes and verifies under `public_key`.
///
/// Unrecognized signature algorithms never reach this function; they are
/// rejected during parsing.
pub fn verify(signed: &SignedLicense, public_key: &Ed25519PublicKey) -> bool {
    let block = match &signed.signature {
        Some(block) => block,
        None => return false,
    };

    let canonical = match signed.document.canonical_bytes() {
        Ok(canonical) => canonical,
        Err(_) => return false,
    };

    if sha256_digest(&canonical) != block.digest {
        return false;
    }

    let signature = match Ed25519Signature::from_hex(&block.value) {
        Ok(signature) => signature,
        Err(_) => return false,
    };

    verify_with_public_key(&canonical, &signature, public_key).is_ok()
}

/// Parse and check a signed license from its wire bytes.
///
/// # Errors
///
/// Returns `LicenseError::MalformedDocument` if the input cannot be parsed;
/// every post-parse failure is an ordinary `Ok(false)`.
pub fn verify_bytes(bytes: &[u8], public_key: &Ed25519PublicKey) -> Result<bool, LicenseError> {
    let signed = SignedLicense::parse(bytes)?;
    Ok(verify(&signed, public_key))
}
