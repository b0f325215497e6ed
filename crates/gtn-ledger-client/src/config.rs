//! Ledger client configuration.
//!
//! Defaults point at the public zero-gas relay and the production registry
//! contract. Override via environment variables or explicit construction
//! for staging/testing. Configuration is populated once at startup and
//! handed to [`LedgerClient::new`][crate::LedgerClient::new] — nothing
//! reads the environment after that.

use url::Url;

/// Default JSON-RPC relay endpoint.
pub const DEFAULT_API_URL: &str = "https://rpc.stabilityprotocol.com/zkt/try-it-out";

/// Default file registry contract address.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0xf79Fc7F6e7C36DCeCD04e603515315528BA9AC72";

/// Configuration for connecting to the trust network relay.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Relay endpoint that receives contract call envelopes.
    pub api_url: Url,
    /// Address of the file registry contract (`0x` + 40 hex chars).
    pub contract_address: String,
    /// Transport-level request timeout in seconds, applied to the HTTP
    /// client at construction.
    pub timeout_secs: u64,
}

impl LedgerConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `GTN_ZKT_API_URL` (default: the public relay endpoint)
    /// - `GTN_CONTRACT_ADDRESS` (default: the production registry contract)
    ///
    /// The timeout has no environment override; set it on the struct
    /// directly when the default of 30 seconds does not fit.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: env_url("GTN_ZKT_API_URL", DEFAULT_API_URL)?,
            contract_address: std::env::var("GTN_CONTRACT_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_CONTRACT_ADDRESS.to_string()),
            timeout_secs: 30,
        })
    }

    /// Create a configuration pointing at a specific relay endpoint (for
    /// tests against a local mock server). Uses the default contract
    /// address and a short timeout.
    pub fn for_endpoint(api_url: Url) -> Self {
        Self {
            api_url,
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            timeout_secs: 5,
        }
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Validate that a string is a well-formed EVM contract address
/// (`0x` + 40 hex chars).
pub(crate) fn is_valid_contract_address(addr: &str) -> bool {
    addr.len() == 42
        && addr.starts_with("0x")
        && addr[2..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid contract address: {0} (expected 0x + 40 hex chars)")]
    InvalidContractAddress(String),
}
