//! SHA-256 over the UTF-8 bytes of the canonical key.

use sha2::{Digest, Sha256};

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// Hash `key` with SHA-256.
#[must_use]
pub fn sha256(key: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hasher.finalize().into()
}

/// Lowercase hex rendering, for logs and diagnostics.
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write as _;

    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, byte| {
        let _ = write!(out, "{byte:02x}");
        out
    })
}
