//! # Demo Subcommand
//!
//! The three-scenario demonstration: issue a valid license, tamper with a
//! copy of a second one, and issue a third that is already expired. Shows
//! each verdict the way a client application would see it.
//!
//! Tampering here follows the rule the core imposes on everyone: parse the
//! signed bytes, mutate an independent copy, re-serialize. The original
//! license is never touched.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use signet_core::Timestamp;
use signet_crypto::Ed25519KeyPair;
use signet_license::{validate, LicenseIssuer, SignedLicense, Verdict};

const DEMO_LICENSE_KEY: &str = "D2287CCA-2A3A-48C2-BCCB-BF12B3E481B0";

/// Arguments for the `demo` subcommand.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Also write the generated licenses and keys to this directory.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the demo subcommand.
pub fn run_demo(args: &DemoArgs) -> Result<u8> {
    // Throwaway key pair; nothing from a demo run should be reusable.
    let issuer = LicenseIssuer::new(Ed25519KeyPair::generate());
    let public_key = issuer.public_key();
    let now = Timestamp::now();

    // Scenario 1: expiry ten days out.
    let license = issuer.issue(now.plus_days(10), DEMO_LICENSE_KEY)?;
    let bytes = license.to_bytes()?;
    print_verdict("fresh license", validate(&bytes, &public_key, now));
    maybe_write(args, "demo-valid.json", &license)?;

    // Scenario 2: re-issue, then stretch the expiry five years on a copy.
    let license = issuer.issue(now.plus_days(10), DEMO_LICENSE_KEY)?;
    let mut copy: serde_json::Value = serde_json::from_slice(&license.to_bytes()?)?;
    copy["expires"] = serde_json::Value::String(now.plus_days(5 * 365).format());
    let tampered = serde_json::to_vec(&copy)?;
    print_verdict("tampered expiry", validate(&tampered, &public_key, now));
    if let Some(dir) = &args.output {
        std::fs::create_dir_all(dir)?;
        let path = dir.join("demo-tampered.json");
        std::fs::write(&path, &tampered)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    // Scenario 3: expiry ten days in the past.
    let license = issuer.issue(now.minus_days(10), DEMO_LICENSE_KEY)?;
    let bytes = license.to_bytes()?;
    print_verdict("expired license", validate(&bytes, &public_key, now));
    maybe_write(args, "demo-expired.json", &license)?;

    Ok(0)
}

fn print_verdict(label: &str, verdict: Verdict) {
    println!("--- {label} ---");
    println!("License is valid? - {}", verdict.is_valid());
    println!("Message - {}", verdict.message());
    println!();
}

fn maybe_write(args: &DemoArgs, name: &str, license: &SignedLicense) -> Result<()> {
    if let Some(dir) = &args.output {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        let path = dir.join(name);
        std::fs::write(&path, license.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote demo license");
    }
    Ok(())
}
