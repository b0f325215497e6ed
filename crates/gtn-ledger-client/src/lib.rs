//! # gtn-ledger-client — Typed client for the Trust Network file registry
//!
//! Submits the registry contract's two operations — look up a file record
//! by content fingerprint, and write a new record — through a zero-gas
//! relay: an HTTP endpoint that accepts a JSON envelope (ABI signature
//! set, target contract, method name, positional arguments) and performs
//! transaction signing and submission server-side. This crate holds no
//! credentials and polls no transaction status; the relay returns an
//! immediate verdict.
//!
//! ## Two surfaces
//!
//! - [`LedgerClient::verify_file`] / [`LedgerClient::write_record`] — the
//!   compatibility surface. Every failure (transport, protocol, malformed
//!   tuple, record absent) flattens to `None`; nothing is raised past the
//!   call boundary. Callers cannot tell the cases apart — that collapse
//!   is inherited behavior, kept deliberately.
//! - [`LedgerClient::try_verify_file`] / [`LedgerClient::try_write_record`]
//!   — structured [`LedgerClientError`] results for callers that need to
//!   distinguish transport failures from protocol rejections.
//!
//! Flattened failures are logged through `tracing` before they disappear.
//!
//! ## Concurrency
//!
//! The client holds no session state and the codec is pure; clone the
//! client freely and issue calls in parallel without coordination. No
//! call retries internally — a transport failure surfaces once.

pub mod config;
pub mod contract;
pub mod error;
mod mapper;

pub use config::{ConfigError, LedgerConfig};
pub use error::LedgerClientError;
pub use gtn_core::{FileCategory, FileLookup, FileRecord, ReferenceRecord};

use std::time::Duration;

use serde_json::Value;

use contract::{CallEnvelope, ReadResponse, WriteResponse, METHOD_GET_FILE, METHOD_STORE_FILE};
use gtn_core::{ensure_hex_prefix, HEX_PREFIX};

/// Client for the trust network file registry contract.
#[derive(Debug, Clone)]
pub struct LedgerClient {
    http: reqwest::Client,
    config: LedgerConfig,
}

impl LedgerClient {
    /// Create a client from configuration.
    ///
    /// Validates the contract address up front and builds the underlying
    /// HTTP client with the configured transport timeout.
    pub fn new(config: LedgerConfig) -> Result<Self, LedgerClientError> {
        if !config::is_valid_contract_address(&config.contract_address) {
            return Err(
                ConfigError::InvalidContractAddress(config.contract_address.clone()).into(),
            );
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LedgerClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self { http, config })
    }

    /// Create a client from environment configuration.
    pub fn from_env() -> Result<Self, LedgerClientError> {
        Self::new(LedgerConfig::from_env()?)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ── dispatch ─────────────────────────────────────────────────────

    /// POST one contract call envelope and deserialize the response body.
    ///
    /// Classifies the outcome: transport errors and non-2xx statuses
    /// become [`LedgerClientError::Http`]/[`LedgerClientError::Api`], an
    /// unparseable body becomes [`LedgerClientError::Json`]. Success-marker
    /// checking is left to the typed callers.
    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        method: &'static str,
        arguments: Vec<Value>,
    ) -> Result<T, LedgerClientError> {
        let envelope = CallEnvelope::new(&self.config.contract_address, method, arguments);
        tracing::debug!(method, id = envelope.id, "dispatching contract call");

        let resp = self
            .http
            .post(self.config.api_url.clone())
            .json(&envelope)
            .send()
            .await
            .map_err(|e| LedgerClientError::Http {
                endpoint: method.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LedgerClientError::Api {
                endpoint: method.into(),
                status,
                body,
            });
        }

        resp.json().await.map_err(|e| LedgerClientError::Json {
            endpoint: method.into(),
            source: e,
        })
    }

    // ── structured surface ───────────────────────────────────────────

    /// Look up a file record by content fingerprint.
    ///
    /// The fingerprint is normalized to its `0x`-prefixed form before
    /// dispatch. `Ok(None)` means the registry holds no record for this
    /// fingerprint — or returned a tuple that does not decode as one; the
    /// registry does not distinguish the two, and neither does this
    /// client.
    pub async fn try_verify_file(
        &self,
        fingerprint: &str,
    ) -> Result<Option<FileLookup>, LedgerClientError> {
        let fingerprint = ensure_hex_prefix(fingerprint);
        let resp: ReadResponse = self
            .call(METHOD_GET_FILE, vec![Value::String(fingerprint)])
            .await?;

        if !resp.success {
            return Err(LedgerClientError::Protocol {
                endpoint: METHOD_GET_FILE.into(),
                detail: "success marker absent or false".into(),
            });
        }
        let Some(output) = resp.output else {
            return Err(LedgerClientError::Protocol {
                endpoint: METHOD_GET_FILE.into(),
                detail: "response carries no output".into(),
            });
        };

        Ok(mapper::record_from_output(&output).map(|record| FileLookup {
            reference: mapper::reference_from_output(&output),
            record,
        }))
    }

    /// Write a new file record, returning the relay's transaction hash.
    ///
    /// The fingerprint is normalized, the category reduced to its
    /// lowercase wire label, and the metadata hex-encoded. Pass `""` for
    /// no metadata. A success response whose transaction hash lacks the
    /// `0x` wire prefix is a protocol failure — the success marker alone
    /// is not trusted.
    pub async fn try_write_record(
        &self,
        file_name: &str,
        fingerprint: &str,
        category: FileCategory,
        metadata: &str,
    ) -> Result<String, LedgerClientError> {
        let arguments = mapper::build_store_args(file_name, fingerprint, category, metadata);
        let resp: WriteResponse = self.call(METHOD_STORE_FILE, arguments).await?;

        if !resp.success {
            return Err(LedgerClientError::Protocol {
                endpoint: METHOD_STORE_FILE.into(),
                detail: "success marker absent or false".into(),
            });
        }
        match resp.hash {
            Some(hash) if hash.starts_with(HEX_PREFIX) => Ok(hash),
            Some(hash) => Err(LedgerClientError::Protocol {
                endpoint: METHOD_STORE_FILE.into(),
                detail: format!("transaction hash lacks the wire prefix: {hash}"),
            }),
            None => Err(LedgerClientError::Protocol {
                endpoint: METHOD_STORE_FILE.into(),
                detail: "response carries no transaction hash".into(),
            }),
        }
    }

    // ── compatibility surface ────────────────────────────────────────

    /// Look up a file record; every failure reads as "not found".
    ///
    /// Transport failures, protocol rejections, and malformed tuples all
    /// flatten to `None` alongside genuine absence. Callers that need to
    /// tell them apart use [`try_verify_file`][Self::try_verify_file].
    pub async fn verify_file(&self, fingerprint: &str) -> Option<FileRecord> {
        match self.try_verify_file(fingerprint).await {
            Ok(lookup) => lookup.map(|l| l.record),
            Err(e) => {
                tracing::warn!(method = METHOD_GET_FILE, error = %e, "lookup failed; reporting record as absent");
                None
            }
        }
    }

    /// Write a new file record; `None` on any failure.
    ///
    /// Returns the `0x`-prefixed transaction hash on success. Callers
    /// that need the failure cause use
    /// [`try_write_record`][Self::try_write_record].
    pub async fn write_record(
        &self,
        file_name: &str,
        fingerprint: &str,
        category: FileCategory,
        metadata: &str,
    ) -> Option<String> {
        match self
            .try_write_record(file_name, fingerprint, category, metadata)
            .await
        {
            Ok(hash) => Some(hash),
            Err(e) => {
                tracing::warn!(method = METHOD_STORE_FILE, error = %e, "write failed");
                None
            }
        }
    }
}
