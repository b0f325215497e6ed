//! Decoding of `getFile` tuple output into domain records, and encoding
//! of `storeFile` argument lists.
//!
//! Shape mismatches are never errors here. A response that does not look
//! like a record tuple decodes to `None`, the same as "not found": the
//! registry signals absence through zero-value sentinels rather than
//! errors, and a malformed tuple is no more actionable for callers than
//! an absent record. Mismatches are logged at debug level so they stay
//! diagnosable.

use gtn_core::{
    ensure_hex_prefix, hex_bytes_to_text, is_zero_record, text_to_hex_bytes, FileCategory,
    FileRecord, ReferenceRecord,
};
use serde_json::Value;

/// Parse a wire integer that may arrive as a JSON number or a base-10
/// decimal string (the relay renders `uint` values as strings).
fn parse_wire_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Decode the 3-element `getFile` output into a [`FileRecord`].
///
/// Returns `None` for any shape mismatch, for the zero-value "no record"
/// sentinel, and for an unparseable timestamp. An out-of-range or
/// unparseable category index is not a failure — it decodes to
/// [`FileCategory::Unknown`].
pub(crate) fn record_from_output(output: &Value) -> Option<FileRecord> {
    let Some(tuple) = output.as_array().filter(|t| t.len() == 3) else {
        tracing::debug!("getFile output is not a 3-element tuple");
        return None;
    };
    let Some(fields) = tuple[0].as_array().filter(|f| f.len() == 6) else {
        tracing::debug!("getFile record tuple has the wrong arity");
        return None;
    };

    // (owner, fileName, fileHash, timestamp, dataBytes, categoryIndex)
    let (Some(owner), Some(file_name), Some(file_hash), Some(data_bytes)) = (
        fields[0].as_str(),
        fields[1].as_str(),
        fields[2].as_str(),
        fields[4].as_str(),
    ) else {
        tracing::debug!("getFile record tuple fields have unexpected types");
        return None;
    };

    if is_zero_record(owner, file_hash) {
        tracing::debug!(file_hash, "record slot is unwritten");
        return None;
    }

    let Some(timestamp) = parse_wire_u64(&fields[3]) else {
        tracing::debug!("getFile record timestamp is not a base-10 integer");
        return None;
    };

    let category = parse_wire_u64(&fields[5])
        .map_or(FileCategory::Unknown, FileCategory::from_wire_code);

    Some(FileRecord {
        file_name: file_name.to_string(),
        file_hash: file_hash.to_string(),
        timestamp,
        category,
        data: hex_bytes_to_text(data_bytes),
    })
}

/// Decode the reference element of the `getFile` output, present when the
/// registry flagged the looked-up hash as a reference to a modified file.
///
/// Returns `None` when the `isReference` flag is unset or the reference
/// tuple does not decode.
pub(crate) fn reference_from_output(output: &Value) -> Option<ReferenceRecord> {
    let tuple = output.as_array().filter(|t| t.len() == 3)?;
    if !tuple[1].as_bool().unwrap_or(false) {
        return None;
    }

    // (originalFileHash, modifiedFileHash, refTimestamp, refData)
    let fields = tuple[2].as_array().filter(|f| f.len() == 4)?;
    Some(ReferenceRecord {
        original_file_hash: fields[0].as_str()?.to_string(),
        modified_file_hash: fields[1].as_str()?.to_string(),
        ref_timestamp: parse_wire_u64(&fields[2])?,
        ref_data: hex_bytes_to_text(fields[3].as_str()?),
    })
}

/// Build the `storeFile` positional argument list.
///
/// Order is fixed by the contract: file name, normalized fingerprint,
/// hex-encoded metadata, lowercase category label.
pub(crate) fn build_store_args(
    file_name: &str,
    fingerprint: &str,
    category: FileCategory,
    metadata: &str,
) -> Vec<Value> {
    vec![
        Value::String(file_name.to_string()),
        Value::String(ensure_hex_prefix(fingerprint)),
        Value::String(text_to_hex_bytes(metadata)),
        Value::String(category.wire_label().to_string()),
    ]
}
