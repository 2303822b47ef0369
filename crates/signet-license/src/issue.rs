//! # License Issuance
//!
//! The server side: build a document, canonicalize, sign, embed the block.
//!
//! ## Security Invariant
//!
//! The signature is computed over [`LicenseDocument::canonical_bytes()`],
//! the same function the verifier calls. The issuer never serializes the
//! document any other way for signing purposes.

use signet_core::Timestamp;
use signet_crypto::{sha256_digest, Ed25519KeyPair, Ed25519PublicKey};

use crate::document::{LicenseDocument, SignedLicense, DEFAULT_ISSUER};
use crate::error::LicenseError;
use crate::signature::SignatureBlock;

/// Issues signed licenses with a fixed key pair and issuer label.
///
/// Stateless across calls apart from reading the clock: every `issue` call
/// is independent, and concurrent callers need no coordination. The private
/// key lives inside the [`Ed25519KeyPair`] for the lifetime of the issuer
/// and is never copied out.
pub struct LicenseIssuer {
    keypair: Ed25519KeyPair,
    issued_by: String,
}

impl LicenseIssuer {
    /// An issuer with the default label.
    pub fn new(keypair: Ed25519KeyPair) -> Self {
        Self::with_label(keypair, DEFAULT_ISSUER)
    }

    /// An issuer with a custom label.
    pub fn with_label(keypair: Ed25519KeyPair, issued_by: impl Into<String>) -> Self {
        Self {
            keypair,
            issued_by: issued_by.into(),
        }
    }

    /// The label stamped into issued licenses.
    pub fn issued_by(&self) -> &str {
        &self.issued_by
    }

    /// The public half of the issuing key, for distribution to validators.
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.keypair.public_key()
    }

    /// Issue a license with `issue_date` set to the current time.
    ///
    /// `expires` is taken as given: issuing a license that is already
    /// expired is permitted, and such a license carries a perfectly valid
    /// signature. Expiry is the validator's concern, not the issuer's.
    pub fn issue(&self, expires: Timestamp, key: &str) -> Result<SignedLicense, LicenseError> {
        self.issue_at(expires, key, Timestamp::now())
    }

    /// Issue a license with an explicit issue date.
    ///
    /// `issue` delegates here; tests and replays inject the clock.
    pub fn issue_at(
        &self,
        expires: Timestamp,
        key: &str,
        issue_date: Timestamp,
    ) -> Result<SignedLicense, LicenseError> {
        let document = LicenseDocument::new(key, issue_date, expires, &self.issued_by);
        let canonical = document.canonical_bytes()?;
        let digest = sha256_digest(&canonical);
        let signature = self.keypair.sign(&canonical);

        Ok(SignedLicense {
            document,
            signature: Some(SignatureBlock::new(digest, &signature)),
        })
    }
}

impl std::fmt::Debug for LicenseIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseIssuer")
            .field("issued_by", &self.issued_by)
            .field("keypair", &self.keypair)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::SignatureAlgorithm;
    use signet_crypto::verify_with_public_key;
    use signet_crypto::Ed25519Signature;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    #[test]
    fn issue_stamps_fields() {
        let issuer = LicenseIssuer::new(Ed25519KeyPair::generate());
        let expires = ts("17/08/2026 09:00:00");
        let signed = issuer
            .issue_at(expires, "LIC-001", ts("07/08/2026 09:00:00"))
            .unwrap();

        assert_eq!(signed.document.key, "LIC-001");
        assert_eq!(signed.document.expires, expires);
        assert_eq!(signed.document.issued_by, DEFAULT_ISSUER);
        assert!(signed.signature.is_some());
    }

    #[test]
    fn issue_with_custom_label() {
        let issuer = LicenseIssuer::with_label(Ed25519KeyPair::generate(), "Acme Licensing");
        let signed = issuer
            .issue_at(ts("01/01/2027 00:00:00"), "K", ts("07/08/2026 09:00:00"))
            .unwrap();
        assert_eq!(signed.document.issued_by, "Acme Licensing");
        assert_eq!(issuer.issued_by(), "Acme Licensing");
    }

    #[test]
    fn embedded_signature_verifies_against_canonical_bytes() {
        let issuer = LicenseIssuer::new(Ed25519KeyPair::generate());
        let signed = issuer
            .issue_at(ts("17/08/2026 09:00:00"), "K", ts("07/08/2026 09:00:00"))
            .unwrap();

        let block = signed.signature.as_ref().unwrap();
        assert_eq!(block.algorithm, SignatureAlgorithm::Ed25519Sha256);

        let canonical = signed.document.canonical_bytes().unwrap();
        assert_eq!(sha256_digest(&canonical), block.digest);

        let sig = Ed25519Signature::from_hex(&block.value).unwrap();
        verify_with_public_key(&canonical, &sig, &issuer.public_key())
            .expect("issued signature should verify");
    }

    #[test]
    fn past_expiry_is_accepted() {
        let issuer = LicenseIssuer::new(Ed25519KeyPair::generate());
        let signed = issuer
            .issue_at(ts("01/01/2020 00:00:00"), "K", ts("07/08/2026 09:00:00"))
            .unwrap();
        assert!(signed.document.expires < signed.document.issue_date);
        assert!(signed.signature.is_some());
    }

    #[test]
    fn issue_uses_current_clock() {
        let issuer = LicenseIssuer::new(Ed25519KeyPair::generate());
        let before = Timestamp::now().minus_days(1);
        let signed = issuer.issue(Timestamp::now().plus_days(10), "K").unwrap();
        let after = Timestamp::now().plus_days(1);
        assert!(signed.document.issue_date > before);
        assert!(signed.document.issue_date < after);
    }

    #[test]
    fn debug_redacts_key_material() {
        let issuer = LicenseIssuer::new(Ed25519KeyPair::generate());
        let debug = format!("{issuer:?}");
        assert!(debug.contains("<private>"));
        assert!(!debug.contains("SigningKey"));
    }
}
