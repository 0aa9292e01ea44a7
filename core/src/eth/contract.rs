//! [`ContractClient`] over an EIP-1193 provider.
//!
//! Reads go through `eth_call`. The write is sent with
//! `eth_sendTransaction` from the wallet's first account (the signer) and
//! confirmed by polling `eth_getTransactionReceipt`.

use std::rc::Rc;
use std::time::Duration;

use alloy_primitives::{hex, Address, Bytes, U256};
use async_trait::async_trait;
use serde_json::{json, Value};

use super::abi;
use super::transport::Eip1193;
use crate::config::RECEIPT_POLL_INTERVAL;
use crate::error::{ChainError, ChainResult};
use crate::gateway::{ContractClient, PendingConfirmation};
use crate::models::{Account, RawTransfer};

/// The transactions contract at a fixed address.
pub struct Eip1193Contract<T> {
    transport: Rc<T>,
    address: Address,
    poll_interval: Duration,
}

impl<T: Eip1193 + 'static> Eip1193Contract<T> {
    pub fn new(transport: Rc<T>, address: Address) -> Self {
        Self {
            transport,
            address,
            poll_interval: RECEIPT_POLL_INTERVAL,
        }
    }

    /// Set the delay between receipt polls.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    async fn call(&self, data: Bytes) -> ChainResult<Vec<u8>> {
        let params = json!([{ "to": self.address.to_checksum(None), "data": hex::encode_prefixed(&data) }, "latest"]);
        let result = self.transport.request("eth_call", params).await?;
        decode_hex_result(&result)
    }

    async fn signer(&self) -> ChainResult<String> {
        let accounts = self.transport.request("eth_accounts", json!([])).await?;
        accounts
            .get(0)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ChainError::InvalidResponse("no signer account available".into()))
    }
}

fn decode_hex_result(value: &Value) -> ChainResult<Vec<u8>> {
    let text = value
        .as_str()
        .ok_or_else(|| ChainError::InvalidResponse(format!("expected hex data, got {}", value)))?;
    hex::decode(text).map_err(|e| ChainError::InvalidResponse(format!("bad hex data: {}", e)))
}

#[async_trait(?Send)]
impl<T: Eip1193 + 'static> ContractClient for Eip1193Contract<T> {
    async fn list_transfers(&self) -> ChainResult<Vec<RawTransfer>> {
        let data = self.call(abi::encode_get_all_transactions()).await?;
        abi::decode_all_transactions(&data)
    }

    async fn transfer_count(&self) -> ChainResult<u64> {
        let data = self.call(abi::encode_get_transaction_count()).await?;
        abi::decode_transaction_count(&data)
    }

    async fn append_transfer(
        &self,
        to: &Account,
        amount: U256,
        message: &str,
        keyword: &str,
    ) -> ChainResult<Box<dyn PendingConfirmation>> {
        let receiver = abi::parse_address(to.as_str())?;
        let data = abi::encode_add_to_blockchain(receiver, amount, message, keyword);
        let from = self.signer().await?;

        let params = json!([{
            "from": from,
            "to": self.address.to_checksum(None),
            "data": hex::encode_prefixed(&data),
        }]);
        let hash = match self.transport.request("eth_sendTransaction", params).await? {
            Value::String(hash) => hash,
            other => {
                return Err(ChainError::InvalidResponse(format!("expected transaction hash, got {}", other)))
            }
        };

        Ok(Box::new(PendingReceipt {
            transport: self.transport.clone(),
            hash,
            poll_interval: self.poll_interval,
        }))
    }
}

/// A submitted contract write waiting for its receipt.
pub struct PendingReceipt<T> {
    transport: Rc<T>,
    hash: String,
    poll_interval: Duration,
}

#[async_trait(?Send)]
impl<T: Eip1193> PendingConfirmation for PendingReceipt<T> {
    fn tx_hash(&self) -> &str {
        &self.hash
    }

    async fn confirm(self: Box<Self>) -> ChainResult<()> {
        // No deadline: a receipt that never shows up keeps this pending.
        loop {
            let receipt = self
                .transport
                .request("eth_getTransactionReceipt", json!([self.hash]))
                .await?;

            if receipt.is_null() {
                self.transport.wait(self.poll_interval).await;
                continue;
            }

            return match receipt.get("status").and_then(Value::as_str) {
                Some("0x0") => Err(ChainError::Reverted(self.hash.clone())),
                _ => Ok(()),
            };
        }
    }
}
