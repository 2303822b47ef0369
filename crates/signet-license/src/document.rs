//! # License Document Model
//!
//! Defines [`LicenseDocument`], the four license fields with their wire
//! names, and [`SignedLicense`], the document with its embedded signature
//! block.
//!
//! ## Canonical Form
//!
//! The canonical bytes of a license are the JCS serialization of the
//! `LicenseDocument` fields alone: sorted keys, compact separators,
//! timestamps in the fixed `DD/MM/YYYY HH:MM:SS` format. Two documents with
//! identical field values always canonicalize to identical bytes.
//!
//! `SignedLicense` flattens the document and keeps the signature block in a
//! separate field, so stripping the signature before recomputing the
//! canonical form is not a step anyone can forget: the canonical bytes are
//! only ever computed from the `LicenseDocument`, which has no signature
//! field to begin with.

use serde::{Deserialize, Serialize};
use signet_core::{CanonicalBytes, CanonicalizationError, Timestamp};

use crate::error::LicenseError;
use crate::signature::SignatureBlock;

/// The issuer label stamped into licenses when no other label is configured.
pub const DEFAULT_ISSUER: &str = "Demo Licensing Server";

/// The four license fields, in their unsigned form.
///
/// All fields are immutable once issued; there are no setters. The `key` is
/// an opaque caller-supplied identifier with no format imposed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseDocument {
    /// Opaque unique license identifier.
    pub key: String,

    /// When the license was issued. Stamped by the issuer.
    #[serde(rename = "issueDate")]
    pub issue_date: Timestamp,

    /// When the license expires. May already be in the past at issuance;
    /// an expired-on-arrival license is valid input to the validator.
    pub expires: Timestamp,

    /// The issuer label.
    #[serde(rename = "issuedBy")]
    pub issued_by: String,
}

impl LicenseDocument {
    /// Build a document from its four fields.
    pub fn new(
        key: impl Into<String>,
        issue_date: Timestamp,
        expires: Timestamp,
        issued_by: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            issue_date,
            expires,
            issued_by: issued_by.into(),
        }
    }

    /// The canonical bytes of this document.
    ///
    /// This is the exact byte sequence that gets hashed and signed, and the
    /// exact byte sequence the verifier recomputes.
    pub fn canonical_bytes(&self) -> Result<CanonicalBytes, CanonicalizationError> {
        CanonicalBytes::new(self)
    }
}

/// A license document with its embedded signature block.
///
/// Created once by [`LicenseIssuer`](crate::issue::LicenseIssuer) and never
/// mutated afterwards. The wire form is JSON with the four document fields
/// at the top level and the signature block under `signature`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedLicense {
    /// The signed fields.
    #[serde(flatten)]
    pub document: LicenseDocument,

    /// The embedded signature block. Absent on a document that was never
    /// signed; the verifier treats absence as verification failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<SignatureBlock>,
}

impl SignedLicense {
    /// Parse a signed license from its wire bytes.
    ///
    /// # Errors
    ///
    /// Returns `LicenseError::MalformedDocument` when the input is not
    /// JSON, a required field is missing, a timestamp does not match the
    /// fixed format, or the signature block carries an unknown algorithm.
    pub fn parse(bytes: &[u8]) -> Result<Self, LicenseError> {
        serde_json::from_slice(bytes).map_err(|e| LicenseError::MalformedDocument(e.to_string()))
    }

    /// Parse a signed license from a string slice.
    pub fn parse_str(raw: &str) -> Result<Self, LicenseError> {
        Self::parse(raw.as_bytes())
    }

    /// Render the persisted wire form (pretty-printed JSON).
    ///
    /// Whitespace in the wire form is irrelevant to verification; the
    /// canonical bytes are recomputed from the parsed fields, never read
    /// off the wire.
    pub fn to_json(&self) -> Result<String, LicenseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the wire form as bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, LicenseError> {
        Ok(self.to_json()?.into_bytes())
    }
}
