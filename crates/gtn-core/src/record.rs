//! Domain records returned by the registry read path, and the zero-value
//! sentinels the contract uses to signal "no record".
//!
//! The registry never reports absence as an error: a `getFile` call on an
//! unwritten slot succeeds and returns a tuple whose owner and hash fields
//! are all zeros. Detection compares against the named constants below —
//! the comparison is on the exact wire strings, with no prefix
//! normalization, matching what the contract actually returns.

use serde::{Deserialize, Serialize};

use crate::category::FileCategory;

/// The all-zero EVM address returned as the owner of an unwritten record
/// slot.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// The all-zero 32-byte hash returned in an unwritten record slot.
pub const ZERO_HASH: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";

/// A file record stored on the trust network.
///
/// Produced transiently by the read path and handed to the caller; the
/// client neither caches nor mutates it. The registry is the sole source
/// of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Name the file was registered under.
    pub file_name: String,
    /// Content hash in canonical `0x`-prefixed form. Equality and lookup
    /// are always on the prefixed form.
    pub file_hash: String,
    /// Registration time in seconds since epoch (provider-defined unit).
    pub timestamp: u64,
    /// Category resolved from the wire code.
    pub category: FileCategory,
    /// Free-form metadata decoded from the wire byte string; empty when
    /// the record carries none.
    pub data: String,
}

/// Cross-reference attached when a looked-up hash belongs to a modified
/// version of an earlier record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Hash of the original record this one modifies.
    pub original_file_hash: String,
    /// Hash of the modified file.
    pub modified_file_hash: String,
    /// Reference creation time in seconds since epoch.
    pub ref_timestamp: u64,
    /// Free-form reference metadata, decoded like record metadata.
    pub ref_data: String,
}

/// Result of a structured registry lookup: the record plus the optional
/// reference the contract attached to the looked-up hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLookup {
    /// The stored record.
    pub record: FileRecord,
    /// Present when the registry flagged the hash as a reference.
    pub reference: Option<ReferenceRecord>,
}

/// True when the owner/hash pair is the contract's "no record" sentinel.
///
/// Either field being zero marks the slot as unwritten, regardless of
/// what the other fields contain.
pub fn is_zero_record(owner: &str, file_hash: &str) -> bool {
    owner == ZERO_ADDRESS || file_hash == ZERO_HASH
}
