//! # License Validation
//!
//! The client-facing verdict, combining the cryptographic check with the
//! expiry check. Three terminal verdicts, evaluated in order:
//!
//! 1. signature invalid (or document unparseable) -> [`Verdict::Tampered`]
//! 2. signature valid, `expires < now` -> [`Verdict::Expired`]
//! 3. otherwise -> [`Verdict::Valid`]
//!
//! Validation is a pure function of the input bytes, the public key, and
//! `now`; repeated calls with the same arguments yield the same verdict.
//! Nothing is retried and nothing is cached: every failure is deterministic.
//!
//! Malformed input merges into the tampered verdict here. An end user
//! holding a corrupt license file gains nothing from knowing whether it
//! failed to parse or failed the signature check; callers that do care use
//! [`verify_bytes`](crate::verify::verify_bytes), which keeps
//! `MalformedDocument` distinct.

use signet_core::Timestamp;
use signet_crypto::Ed25519PublicKey;

use crate::document::SignedLicense;
use crate::verify::verify;

/// Message for a license that passed every check.
pub const MSG_OK: &str = "Ok";

/// Message for a license whose signature could not be verified.
pub const MSG_TAMPERED: &str =
    "License is corrupt or has been tampered with - signature could not be verified";

/// Message for a license whose signature is valid but which has expired.
pub const MSG_EXPIRED: &str = "This License has Expired";

/// The terminal outcome of validating a license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Signature valid, not expired.
    Valid,
    /// Signature could not be verified, or the document was malformed.
    Tampered,
    /// Signature valid, but the expiry lies before `now`.
    Expired,
}

impl Verdict {
    /// The boolean half of the verdict.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The human-readable reason.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Valid => MSG_OK,
            Verdict::Tampered => MSG_TAMPERED,
            Verdict::Expired => MSG_EXPIRED,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Validate a signed license from its wire bytes.
///
/// The single externally callable operation on the client side. `now` is
/// passed explicitly so callers control the clock; it is compared against
/// the `expires` field at second granularity in the shared local time
/// reference.
pub fn validate(bytes: &[u8], public_key: &Ed25519PublicKey, now: Timestamp) -> Verdict {
    let signed = match SignedLicense::parse(bytes) {
        Ok(signed) => signed,
        Err(_) => return Verdict::Tampered,
    };
    validate_signed(&signed, public_key, now)
}

/// Validate an already-parsed license.
pub fn validate_signed(
    signed: &SignedLicense,
    public_key: &Ed25519PublicKey,
    now: Timestamp,
) -> Verdict {
    if !verify(signed, public_key) {
        return Verdict::Tampered;
    }
    if signed.document.expires < now {
        return Verdict::Expired;
    }
    Verdict::Valid
}
