//! [`WalletGateway`] over an EIP-1193 provider.

use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::transport::Eip1193;
use super::to_quantity;
use crate::error::{WalletError, WalletResult};
use crate::gateway::{TransferRequest, TxHash, WalletGateway};
use crate::models::Account;

/// Wallet gateway backed by `eth_accounts`, `eth_requestAccounts` and
/// `eth_sendTransaction`.
pub struct Eip1193Wallet<T> {
    transport: Rc<T>,
}

impl<T: Eip1193> Eip1193Wallet<T> {
    pub fn new(transport: Rc<T>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Rc<T> {
        &self.transport
    }

    async fn accounts(&self, method: &str) -> WalletResult<Vec<Account>> {
        if !self.transport.is_available() {
            return Err(WalletError::Unavailable);
        }
        let result = self.transport.request(method, json!([])).await?;
        parse_accounts(result)
    }
}

/// Decode an array of address strings.
pub fn parse_accounts(value: Value) -> WalletResult<Vec<Account>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(WalletError::InvalidResponse(format!("expected account list, got {}", other)))
        }
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::String(address) => Ok(Account::new(address)),
            other => Err(WalletError::InvalidResponse(format!("expected address, got {}", other))),
        })
        .collect()
}

#[async_trait(?Send)]
impl<T: Eip1193> WalletGateway for Eip1193Wallet<T> {
    fn has_provider(&self) -> bool {
        self.transport.is_available()
    }

    async fn list_accounts(&self) -> WalletResult<Vec<Account>> {
        self.accounts("eth_accounts").await
    }

    async fn request_accounts(&self) -> WalletResult<Vec<Account>> {
        self.accounts("eth_requestAccounts").await
    }

    async fn submit_raw_transfer(&self, request: TransferRequest) -> WalletResult<TxHash> {
        if !self.transport.is_available() {
            return Err(WalletError::Unavailable);
        }
        let params = json!([{
            "from": request.from.as_str(),
            "to": request.to.as_str(),
            "gas": format!("0x{:x}", request.gas),
            "value": to_quantity(request.value),
        }]);

        match self.transport.request("eth_sendTransaction", params).await? {
            Value::String(hash) => Ok(TxHash(hash)),
            other => Err(WalletError::InvalidResponse(format!("expected transaction hash, got {}", other))),
        }
    }
}
