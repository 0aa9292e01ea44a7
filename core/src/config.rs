//! Configuration.
//!
//! The contract address and ABI are compiled in. Only the native CLI reads
//! anything at runtime, from the environment (and `.env` when present).

use std::time::Duration;

use alloy_primitives::{address, Address};

use crate::error::ConfigError;

/// Address of the deployed transactions contract.
pub const CONTRACT_ADDRESS: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

/// Delay between `eth_getTransactionReceipt` polls.
pub const RECEIPT_POLL_INTERVAL: Duration = Duration::from_millis(1500);

/// Default JSON-RPC endpoint for the native transport.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Runtime settings for the native CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON-RPC endpoint of a node with unlocked accounts.
    pub rpc_url: String,
    /// Directory holding the cached transfer count.
    pub cache_dir: String,
    /// Delay between receipt polls.
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            cache_dir: crate::cache::DEFAULT_CACHE_DIR.to_string(),
            poll_interval: RECEIPT_POLL_INTERVAL,
        }
    }
}

impl Config {
    /// Read `PRIME_RPC_URL`, `PRIME_CACHE_DIR` and `PRIME_POLL_MS`.
    #[cfg(feature = "native")]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Try loading .env file
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup("PRIME_RPC_URL").filter(|v| !v.trim().is_empty()) {
            config.rpc_url = url.trim().to_string();
        }
        if let Some(dir) = lookup("PRIME_CACHE_DIR").filter(|v| !v.trim().is_empty()) {
            config.cache_dir = dir;
        }
        if let Some(ms) = lookup("PRIME_POLL_MS") {
            // Zero would poll the node in a tight loop.
            let millis = ms
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&millis| millis > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    name: "PRIME_POLL_MS",
                    value: ms.clone(),
                })?;
            config.poll_interval = Duration::from_millis(millis);
        }

        Ok(config)
    }
}
