//! # Wire Hex Codec
//!
//! Conversions between domain text values and the hex representation the
//! registry contract speaks: `0x`-prefixed byte strings for metadata
//! payloads, and prefix normalization for content hashes.
//!
//! Decoding is deliberately lossy-but-total: malformed hex pairs are
//! skipped rather than surfaced as errors, so a corrupt or truncated
//! metadata field never blocks the caller from seeing the rest of a
//! record. The cost is that corruption is silent — callers that must
//! detect it have to compare against a re-encoding of the result.

/// The marker prepended to hash and byte-sequence strings to signal
/// hexadecimal encoding on the wire.
pub const HEX_PREFIX: &str = "0x";

/// Normalize a hash string to its canonical `0x`-prefixed form.
///
/// Idempotent: a hash that already carries the prefix is returned
/// unchanged, so the prefix is never doubled.
pub fn ensure_hex_prefix(hash: &str) -> String {
    if hash.starts_with(HEX_PREFIX) {
        hash.to_string()
    } else {
        format!("{HEX_PREFIX}{hash}")
    }
}

/// Decode a hex-encoded byte string into text.
///
/// The empty string and the bare `"0x"` empty-sequence sentinel both
/// decode to `""`. Each complete pair of hex digits becomes one byte,
/// interpreted as a single-byte character. Pairs that are not valid hex
/// are skipped, and a trailing incomplete pair is ignored.
///
/// Round-trip with [`text_to_hex_bytes`] holds for text made of
/// single-byte-representable characters only; multi-byte code points are
/// encoded as UTF-8 bytes and decode back as individual characters.
pub fn hex_bytes_to_text(hex: &str) -> String {
    if hex.is_empty() || hex == HEX_PREFIX {
        return String::new();
    }

    let clean = hex.strip_prefix(HEX_PREFIX).unwrap_or(hex);

    let mut text = String::with_capacity(clean.len() / 2);
    for pair in clean.as_bytes().chunks_exact(2) {
        // Non-UTF-8 or non-hex pairs are dropped, not errors.
        let Ok(digits) = std::str::from_utf8(pair) else {
            continue;
        };
        if let Ok(byte) = u8::from_str_radix(digits, 16) {
            text.push(byte as char);
        }
    }
    text
}

/// Encode text into a `0x`-prefixed lowercase hex byte string.
///
/// Bytes are the UTF-8 encoding of `text`; empty input yields the bare
/// `"0x"` empty-sequence sentinel.
pub fn text_to_hex_bytes(text: &str) -> String {
    let payload: String = text.bytes().map(|b| format!("{b:02x}")).collect();
    format!("{HEX_PREFIX}{payload}")
}
