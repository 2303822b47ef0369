//! # Validate Subcommand
//!
//! Loads the issuer's public key and a license file, runs validation
//! against the current clock, and prints the verdict.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use signet_core::Timestamp;
use signet_crypto::load_public_key;
use signet_license::validate;

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the issuer's public key file (hex-encoded 32 bytes).
    #[arg(long)]
    pub pubkey: PathBuf,

    /// Path to the signed license file.
    #[arg(value_name = "LICENSE")]
    pub license: PathBuf,
}

/// Execute the validate subcommand. Exit code 0 for a valid license,
/// 1 otherwise.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let public_key = load_public_key(&args.pubkey)
        .with_context(|| format!("loading public key from {}", args.pubkey.display()))?;

    let bytes = std::fs::read(&args.license)
        .with_context(|| format!("reading license from {}", args.license.display()))?;

    let verdict = validate(&bytes, &public_key, Timestamp::now());

    tracing::info!(valid = verdict.is_valid(), "validated license");

    println!("License is valid? - {}", verdict.is_valid());
    println!("Message - {}", verdict.message());

    Ok(if verdict.is_valid() { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use signet_crypto::{save_keypair, Ed25519KeyPair};
    use signet_license::LicenseIssuer;

    fn write_license(dir: &std::path::Path, expires: Timestamp) -> (PathBuf, PathBuf) {
        let keypair = Ed25519KeyPair::generate();
        let (_, pub_path) = save_keypair(&keypair, dir, "issuer").unwrap();
        let issuer = LicenseIssuer::new(keypair);
        let signed = issuer.issue(expires, "LIC-CLI-VAL").unwrap();
        let license_path = dir.join("license.json");
        std::fs::write(&license_path, signed.to_json().unwrap()).unwrap();
        (pub_path, license_path)
    }

    #[test]
    fn valid_license_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let (pubkey, license) = write_license(dir.path(), Timestamp::now().plus_days(10));
        let args = ValidateArgs { pubkey, license };
        assert_eq!(run_validate(&args).unwrap(), 0);
    }

    #[test]
    fn expired_license_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let (pubkey, license) = write_license(dir.path(), Timestamp::now().minus_days(10));
        let args = ValidateArgs { pubkey, license };
        assert_eq!(run_validate(&args).unwrap(), 1);
    }

    #[test]
    fn corrupt_license_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let (pubkey, license) = write_license(dir.path(), Timestamp::now().plus_days(10));
        std::fs::write(&license, "{ not json").unwrap();
        let args = ValidateArgs { pubkey, license };
        assert_eq!(run_validate(&args).unwrap(), 1);
    }

    #[test]
    fn missing_pubkey_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let (_, license) = write_license(dir.path(), Timestamp::now().plus_days(10));
        let args = ValidateArgs {
            pubkey: dir.path().join("absent.pub"),
            license,
        };
        assert!(run_validate(&args).is_err());
    }
}
