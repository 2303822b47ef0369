//! Hex encoding helpers shared across the crate. Kept local instead of
//! pulling in a hex crate for two short functions.

/// Render bytes as a lowercase hex string.
pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// First four bytes as hex, for redacted Debug output.
pub(crate) fn hex_prefix(bytes: &[u8]) -> String {
    bytes_to_hex(&bytes[..bytes.len().min(4)])
}

/// Decode a hex string into bytes.
pub(crate) fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, String> {
    if hex.len() % 2 != 0 {
        return Err("hex string must have even length".to_string());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("invalid hex at position {i}: {e}"))
        })
        .collect()
}
