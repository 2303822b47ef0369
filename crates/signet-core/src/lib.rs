//! # signet-core: Foundational Types for Signet Licensing
//!
//! This crate is the bedrock of the Signet workspace. It defines the
//! primitives that the signing and verifying sides must agree on, and it
//! enforces that agreement at compile time. Every other crate in the
//! workspace depends on `signet-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalBytes` newtype.** ALL signing input and digest computation
//!    flows through `CanonicalBytes::new()`. No raw `serde_json::to_vec()`
//!    anywhere in a signing or verification path. The signer and the
//!    verifier share one canonicalization function by construction, so a
//!    signature produced on one side always verifies against the bytes
//!    recomputed on the other.
//!
//! 2. **Fixed-format timestamps.** The `Timestamp` type renders and parses
//!    exactly `DD/MM/YYYY HH:MM:SS` at second precision. License documents
//!    carry no timezone; issuer and validator are assumed to share a single
//!    local time reference (a documented limitation of the format).
//!
//! 3. **Structured errors.** `thiserror` enums with diagnostic context.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `signet-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use error::{CanonicalizationError, TimestampError};
pub use temporal::{Timestamp, TIMESTAMP_FORMAT};
