//! Ledger client error types.

/// Errors from trust network relay calls.
///
/// Only the `try_*` operations surface these. The compatibility surface
/// ([`verify_file`][crate::LedgerClient::verify_file] and
/// [`write_record`][crate::LedgerClient::write_record]) flattens every
/// variant to `None` after logging it.
#[derive(Debug, thiserror::Error)]
pub enum LedgerClientError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Relay returned a non-2xx status.
    #[error("relay {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response body was not valid JSON.
    #[error("malformed response from {endpoint}: {source}")]
    Json {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Response parsed but did not carry a usable success payload: the
    /// success marker was absent or false, or a required field was
    /// missing or malformed.
    #[error("relay rejected {endpoint}: {detail}")]
    Protocol { endpoint: String, detail: String },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
