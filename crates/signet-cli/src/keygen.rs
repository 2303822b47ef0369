//! # Keygen Subcommand
//!
//! Generates an Ed25519 issuer key pair and writes it to hex files. The
//! `.key` file stays with the issuing server; the `.pub` file ships with
//! the validating application.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use signet_crypto::{save_keypair, Ed25519KeyPair};

/// Arguments for the `keygen` subcommand.
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Output directory for the key pair files.
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,

    /// Prefix for the key filenames.
    #[arg(long, default_value = "signet")]
    pub prefix: String,
}

/// Execute the keygen subcommand.
pub fn run_keygen(args: &KeygenArgs) -> Result<u8> {
    let keypair = Ed25519KeyPair::generate();
    let (key_path, pub_path) = save_keypair(&keypair, &args.output, &args.prefix)?;

    tracing::info!(prefix = %args.prefix, "generated issuer key pair");

    println!("OK: generated Ed25519 key pair");
    println!("  Private key: {}", key_path.display());
    println!("  Public key:  {}", pub_path.display());
    println!("  Public key (hex): {}", keypair.public_key().to_hex());

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use signet_crypto::load_keypair;

    #[test]
    fn keygen_creates_loadable_files() {
        let dir = tempfile::tempdir().unwrap();
        let args = KeygenArgs {
            output: dir.path().to_path_buf(),
            prefix: "test".to_string(),
        };
        assert_eq!(run_keygen(&args).unwrap(), 0);

        assert!(dir.path().join("test.key").exists());
        assert!(dir.path().join("test.pub").exists());
        load_keypair(&dir.path().join("test.key")).unwrap();
    }
}
