//! SHA-256 digests used to confirm a decryption

use sha2::{Digest, Sha256};

use crate::error::{AttackError, Result};

/// Lowercase hex SHA-256 of the UTF-8 bytes of `text`.
pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Whether `text` hashes to `target` (hex, case-insensitive).
pub fn matches(text: &str, target: &str) -> bool {
    sha256_hex(text).eq_ignore_ascii_case(target.trim())
}

/// Trims and lowercases a target digest, rejecting anything that is not
/// exactly 32 bytes of hex.
pub fn parse_target(digest: &str) -> Result<String> {
    let digest = digest.trim().to_ascii_lowercase();
    match hex::decode(&digest) {
        Ok(bytes) if bytes.len() == 32 => Ok(digest),
        _ => Err(AttackError::InvalidDigest(digest)),
    }
}
