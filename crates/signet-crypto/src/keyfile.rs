//! # Key Files
//!
//! Loading and storing Ed25519 key material as hex text files. The issuing
//! side keeps `<prefix>.key` (the 32-byte private seed); the validating
//! side ships only `<prefix>.pub` (the 32-byte public key).
//!
//! Every load failure, whether the file is absent, unreadable, or not valid
//! hex of the right length, surfaces as [`CryptoError::KeyUnavailable`].
//! Nothing here substitutes a default key: an operation without its key
//! cannot proceed.

use std::path::Path;

use crate::ed25519::{Ed25519KeyPair, Ed25519PublicKey};
use crate::error::CryptoError;
use crate::hex::{bytes_to_hex, hex_to_bytes};

/// Write a key pair to `<prefix>.key` and `<prefix>.pub` under `dir`.
///
/// Returns the two paths written (private first).
///
/// # Errors
///
/// Returns `CryptoError::KeyUnavailable` if the directory cannot be created
/// or either file cannot be written.
pub fn save_keypair(
    keypair: &Ed25519KeyPair,
    dir: &Path,
    prefix: &str,
) -> Result<(std::path::PathBuf, std::path::PathBuf), CryptoError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        CryptoError::KeyUnavailable(format!("cannot create key directory {}: {e}", dir.display()))
    })?;

    let key_path = dir.join(format!("{prefix}.key"));
    let pub_path = dir.join(format!("{prefix}.pub"));

    let seed_hex = bytes_to_hex(&keypair.to_seed_bytes());
    std::fs::write(&key_path, &seed_hex).map_err(|e| {
        CryptoError::KeyUnavailable(format!("cannot write {}: {e}", key_path.display()))
    })?;
    std::fs::write(&pub_path, keypair.public_key().to_hex()).map_err(|e| {
        CryptoError::KeyUnavailable(format!("cannot write {}: {e}", pub_path.display()))
    })?;

    Ok((key_path, pub_path))
}

/// Load a key pair from a private-seed hex file.
pub fn load_keypair(path: &Path) -> Result<Ed25519KeyPair, CryptoError> {
    let seed = read_key_bytes(path)?;
    Ok(Ed25519KeyPair::from_seed(&seed))
}

/// Load a public key from a public-key hex file.
pub fn load_public_key(path: &Path) -> Result<Ed25519PublicKey, CryptoError> {
    let bytes = read_key_bytes(path)?;
    Ok(Ed25519PublicKey::from_bytes(bytes))
}

/// Read a file expected to hold exactly 32 bytes of hex-encoded key material.
fn read_key_bytes(path: &Path) -> Result<[u8; 32], CryptoError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CryptoError::KeyUnavailable(format!("cannot read {}: {e}", path.display()))
    })?;
    let hex = content.trim();
    let raw = hex_to_bytes(hex).map_err(|e| {
        CryptoError::KeyUnavailable(format!("{} is not valid hex: {e}", path.display()))
    })?;
    if raw.len() != 32 {
        return Err(CryptoError::KeyUnavailable(format!(
            "{} must hold 32 bytes of key material, got {}",
            path.display(),
            raw.len()
        )));
    }
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&raw);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let kp = Ed25519KeyPair::generate();
        let (key_path, pub_path) = save_keypair(&kp, dir.path(), "issuer").unwrap();

        assert!(key_path.ends_with("issuer.key"));
        assert!(pub_path.ends_with("issuer.pub"));

        let loaded = load_keypair(&key_path).unwrap();
        assert_eq!(loaded.public_key(), kp.public_key());

        let pk = load_public_key(&pub_path).unwrap();
        assert_eq!(pk, kp.public_key());
    }

    #[test]
    fn key_files_are_hex() {
        let dir = tempfile::tempdir().unwrap();
        let kp = Ed25519KeyPair::generate();
        let (key_path, pub_path) = save_keypair(&kp, dir.path(), "t").unwrap();

        for path in [key_path, pub_path] {
            let content = std::fs::read_to_string(path).unwrap();
            assert_eq!(content.len(), 64);
            assert!(content.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn trailing_newline_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let kp = Ed25519KeyPair::generate();
        let path = dir.path().join("padded.pub");
        std::fs::write(&path, format!("{}\n", kp.public_key().to_hex())).unwrap();
        assert_eq!(load_public_key(&path).unwrap(), kp.public_key());
    }

    #[test]
    fn missing_file_is_key_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_keypair(&dir.path().join("absent.key")).unwrap_err();
        assert!(matches!(err, CryptoError::KeyUnavailable(_)));
    }

    #[test]
    fn corrupt_hex_is_key_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.key");
        std::fs::write(&path, "not hex at all").unwrap();
        let err = load_keypair(&path).unwrap_err();
        assert!(matches!(err, CryptoError::KeyUnavailable(_)));
    }

    #[test]
    fn wrong_length_is_key_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.key");
        std::fs::write(&path, "abcd").unwrap();
        let err = load_keypair(&path).unwrap_err();
        assert!(matches!(err, CryptoError::KeyUnavailable(_)));
        assert!(format!("{err}").contains("32 bytes"));
    }
}
