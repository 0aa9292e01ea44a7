//! EIP-1193 request transport.
//!
//! Browser wallets expose `request({ method, params })`; a development node
//! exposes the same methods over JSON-RPC. [`Eip1193`] covers both.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ProviderError;

/// Something that answers EIP-1193 `request` calls.
#[async_trait(?Send)]
pub trait Eip1193 {
    /// Whether the provider exists at all (an injected object was found).
    fn is_available(&self) -> bool;

    /// Perform one request. `params` is a JSON array.
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;

    /// Suspend between receipt polls.
    async fn wait(&self, duration: Duration);
}

#[cfg(feature = "native")]
pub use http::HttpTransport;

#[cfg(feature = "native")]
mod http {
    use std::borrow::Cow;
    use std::time::Duration;

    use alloy::providers::{DynProvider, Provider, ProviderBuilder};
    use alloy::transports::TransportError;
    use async_trait::async_trait;
    use serde_json::Value;

    use super::Eip1193;
    use crate::error::{ConfigError, ProviderError};

    /// Method actually sent to the node. There is no user to prompt, so
    /// `eth_requestAccounts` is answered with `eth_accounts`.
    pub(super) fn node_method(method: &str) -> &str {
        match method {
            "eth_requestAccounts" => "eth_accounts",
            other => other,
        }
    }

    /// Keep the node's JSON-RPC error code so 4001 still reads as a rejection.
    pub(super) fn provider_error(err: TransportError) -> ProviderError {
        match err.as_error_resp() {
            Some(payload) => ProviderError::new(payload.code, payload.message.to_string()),
            None => ProviderError::transport(err.to_string()),
        }
    }

    /// JSON-RPC over HTTP against a node with unlocked accounts.
    pub struct HttpTransport {
        provider: DynProvider,
        url: String,
    }

    impl HttpTransport {
        pub fn new(rpc_url: &str) -> Result<Self, ConfigError> {
            let url = rpc_url.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PRIME_RPC_URL",
                value: rpc_url.to_string(),
            })?;
            let provider = ProviderBuilder::new().connect_http(url).erased();
            Ok(Self { provider, url: rpc_url.to_string() })
        }

        pub fn url(&self) -> &str {
            &self.url
        }
    }

    #[async_trait(?Send)]
    impl Eip1193 for HttpTransport {
        fn is_available(&self) -> bool {
            true
        }

        async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
            let method = node_method(method);
            log::debug!("→ {}", method);
            self.provider
                .raw_request::<_, Value>(Cow::Owned(method.to_string()), params)
                .await
                .map_err(provider_error)
        }

        async fn wait(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

}
