//! Wire contract for the zero-gas relay: the fixed ABI signature set, the
//! request envelope, and the two response shapes.
//!
//! The relay is signature-set-based rather than per-call-typed: every
//! envelope carries both method signatures and names the one to invoke.
//! The signature strings are the registry contract's exact ABI and must
//! not be reformatted — the relay parses them verbatim.

use serde::{Deserialize, Serialize};

/// ABI signature for the record lookup method.
pub const GET_FILE_SIGNATURE: &str = "function getFile(bytes32 fileHash) view returns (tuple(address owner, string fileName, bytes32 fileHash, uint timestamp, bytes data, uint8 category) fileRecord, bool isReference, tuple(bytes32 originalFileHash, bytes32 modifiedFileHash, uint refTimestamp, bytes refData) referenceRecord)";

/// ABI signature for the record write method.
pub const STORE_FILE_SIGNATURE: &str =
    "function storeFile(string fileName, bytes32 fileHash, bytes data, string categoryStr)";

/// Method name for record lookups.
pub const METHOD_GET_FILE: &str = "getFile";

/// Method name for record writes.
pub const METHOD_STORE_FILE: &str = "storeFile";

/// Request envelope accepted by the relay.
#[derive(Debug, Serialize)]
pub struct CallEnvelope {
    /// The fixed two-signature ABI set; both signatures are always sent.
    pub abi: [&'static str; 2],
    /// Target contract address.
    pub to: String,
    /// Method to invoke, one of the two named in `abi`.
    pub method: &'static str,
    /// Timestamp-derived request identifier. Used for tracing only;
    /// collisions are tolerated, the relay does not deduplicate on it.
    pub id: i64,
    /// Positional arguments for `method`.
    pub arguments: Vec<serde_json::Value>,
}

impl CallEnvelope {
    /// Build an envelope for one contract call.
    pub fn new(to: &str, method: &'static str, arguments: Vec<serde_json::Value>) -> Self {
        Self {
            abi: [GET_FILE_SIGNATURE, STORE_FILE_SIGNATURE],
            to: to.to_string(),
            method,
            id: chrono::Utc::now().timestamp_millis(),
            arguments,
        }
    }
}

/// Response body of a `getFile` call.
///
/// `#[serde(default)]` makes an absent `success` marker read as `false` —
/// the relay's failure responses do not always carry one, and the two
/// cases mean the same thing.
#[derive(Debug, Deserialize)]
pub struct ReadResponse {
    /// Declared success marker; must be checked before touching `output`.
    #[serde(default)]
    pub success: bool,
    /// Raw decoded contract tuple, handed to the record mapper.
    #[serde(default)]
    pub output: Option<serde_json::Value>,
}

/// Response body of a `storeFile` call.
#[derive(Debug, Deserialize)]
pub struct WriteResponse {
    /// Declared success marker; must be checked before touching `hash`.
    #[serde(default)]
    pub success: bool,
    /// Transaction hash of the submitted write.
    #[serde(default)]
    pub hash: Option<String>,
}
