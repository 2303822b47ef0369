//! # Issue Subcommand
//!
//! Loads the issuer's private key, issues a signed license, and writes the
//! license JSON to a file or stdout.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use signet_core::Timestamp;
use signet_crypto::load_keypair;
use signet_license::LicenseIssuer;

/// Arguments for the `issue` subcommand.
#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Path to the issuer's private key file (hex-encoded 32-byte seed).
    #[arg(long)]
    pub key_file: PathBuf,

    /// The license key to embed. A fresh UUID when omitted.
    #[arg(long)]
    pub license_key: Option<String>,

    /// Expiry as a number of days from now.
    #[arg(long, conflicts_with = "expires")]
    pub days: Option<i64>,

    /// Expiry as an explicit timestamp, DD/MM/YYYY HH:MM:SS.
    #[arg(long)]
    pub expires: Option<String>,

    /// Write the signed license here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Issuer label to stamp into the license.
    #[arg(long)]
    pub issued_by: Option<String>,
}

/// Execute the issue subcommand.
pub fn run_issue(args: &IssueArgs) -> Result<u8> {
    let expires = match (&args.days, &args.expires) {
        (Some(days), None) => Timestamp::now().plus_days(*days),
        (None, Some(raw)) => Timestamp::parse(raw)
            .with_context(|| format!("invalid --expires value {raw:?}"))?,
        (None, None) => bail!("one of --days or --expires is required"),
        (Some(_), Some(_)) => bail!("--days conflicts with --expires"),
    };

    let license_key = args
        .license_key
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let keypair = load_keypair(&args.key_file)
        .with_context(|| format!("loading issuer key from {}", args.key_file.display()))?;

    let issuer = match &args.issued_by {
        Some(label) => LicenseIssuer::with_label(keypair, label),
        None => LicenseIssuer::new(keypair),
    };

    let signed = issuer.issue(expires, &license_key)?;
    let json = signed.to_json()?;

    tracing::info!(
        key = %license_key,
        expires = %signed.document.expires,
        "issued license"
    );

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("writing license to {}", path.display()))?;
            println!("OK: issued license {license_key}");
            println!("  Expires: {}", signed.document.expires);
            println!("  Written: {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use signet_crypto::{load_public_key, save_keypair, Ed25519KeyPair};
    use signet_license::{validate, Verdict};

    #[test]
    fn issue_writes_a_validating_license() {
        let dir = tempfile::tempdir().unwrap();
        let keypair = Ed25519KeyPair::generate();
        let (key_path, pub_path) = save_keypair(&keypair, dir.path(), "issuer").unwrap();

        let license_path = dir.path().join("license.json");
        let args = IssueArgs {
            key_file: key_path,
            license_key: Some("LIC-CLI-001".to_string()),
            days: Some(10),
            expires: None,
            output: Some(license_path.clone()),
            issued_by: None,
        };
        assert_eq!(run_issue(&args).unwrap(), 0);

        let bytes = std::fs::read(&license_path).unwrap();
        let pk = load_public_key(&pub_path).unwrap();
        assert_eq!(validate(&bytes, &pk, Timestamp::now()), Verdict::Valid);
    }

    #[test]
    fn issue_requires_an_expiry() {
        let dir = tempfile::tempdir().unwrap();
        let keypair = Ed25519KeyPair::generate();
        let (key_path, _) = save_keypair(&keypair, dir.path(), "issuer").unwrap();

        let args = IssueArgs {
            key_file: key_path,
            license_key: None,
            days: None,
            expires: None,
            output: None,
            issued_by: None,
        };
        assert!(run_issue(&args).is_err());
    }

    #[test]
    fn issue_with_missing_key_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = IssueArgs {
            key_file: dir.path().join("absent.key"),
            license_key: None,
            days: Some(10),
            expires: None,
            output: None,
            issued_by: None,
        };
        let err = run_issue(&args).unwrap_err();
        assert!(format!("{err:#}").contains("absent.key"));
    }
}
