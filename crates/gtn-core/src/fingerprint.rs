//! Content fingerprint computation.
//!
//! The registry keys records by the SHA-256 hash of file content. Callers
//! holding raw bytes derive the canonical lookup key here instead of
//! normalizing the output of an external hasher.

use sha2::{Digest, Sha256};

use crate::wire::HEX_PREFIX;

/// Compute the `0x`-prefixed lowercase hex SHA-256 fingerprint of `bytes`.
///
/// The result is already in the canonical prefixed form the lookup and
/// write paths expect — no further normalization needed.
pub fn sha256_fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    format!("{HEX_PREFIX}{hex}")
}
