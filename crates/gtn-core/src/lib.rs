#![deny(missing_docs)]

//! # gtn-core — Foundational Types for the Trust Network Stack
//!
//! This crate defines the pure types and codec primitives shared across the
//! Trust Network workspace. It performs no I/O and has no internal crate
//! dependencies — only `serde`, `thiserror`, and `sha2` from the external
//! ecosystem.
//!
//! ## Design Principles
//!
//! 1. **The wire codec is total.** [`wire`] conversions never fail: hash
//!    normalization is idempotent, and byte-string decoding degrades
//!    gracefully on corrupt input instead of erroring (see the module docs
//!    for the trade-off this makes).
//!
//! 2. **One category table.** [`FileCategory`] owns the code↔label mapping
//!    in both directions. No other crate defines its own list that can
//!    diverge from the contract's.
//!
//! 3. **Sentinels are named.** The registry contract signals "no record"
//!    through all-zero field values, not errors. [`ZERO_ADDRESS`] and
//!    [`ZERO_HASH`] are the single definition of those sentinels.

pub mod category;
pub mod fingerprint;
pub mod record;
pub mod wire;

// Re-export primary types at crate root for ergonomic imports.
pub use category::{FileCategory, ParseCategoryError};
pub use fingerprint::sha256_fingerprint;
pub use record::{is_zero_record, FileLookup, FileRecord, ReferenceRecord, ZERO_ADDRESS, ZERO_HASH};
pub use wire::{ensure_hex_prefix, hex_bytes_to_text, text_to_hex_bytes, HEX_PREFIX};
