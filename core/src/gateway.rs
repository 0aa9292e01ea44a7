//! Wallet gateway and contract client seams.
//!
//! The orchestrator only talks to the wallet and the contract through these
//! traits, so tests can swap in fakes and the browser and native builds can
//! plug in their own transports.
//!
//! All futures are `?Send`: every flow runs on a single cooperative thread
//! (the browser event loop or a current-thread runtime).

use alloy_primitives::U256;
use async_trait::async_trait;

use crate::error::{ChainResult, WalletResult};
use crate::models::{Account, RawTransfer};

/// Gas limit for a plain ether transfer (`0x5208`).
pub const TRANSFER_GAS_LIMIT: u64 = 21_000;

/// A native-currency transfer handed to the wallet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRequest {
    pub from: Account,
    pub to: Account,
    /// Value in wei.
    pub value: U256,
    pub gas: u64,
}

impl TransferRequest {
    pub fn new(from: Account, to: Account, value: U256) -> Self {
        Self { from, to, value, gas: TRANSFER_GAS_LIMIT }
    }
}

/// Hash of a transaction accepted by the wallet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxHash(pub String);

/// Account discovery and raw transfers through an injected wallet.
#[async_trait(?Send)]
pub trait WalletGateway {
    /// Whether a wallet extension is present.
    fn has_provider(&self) -> bool;

    /// Already-authorized accounts. Never prompts.
    async fn list_accounts(&self) -> WalletResult<Vec<Account>>;

    /// Ask the user to authorize accounts.
    async fn request_accounts(&self) -> WalletResult<Vec<Account>>;

    /// Submit a native transfer without waiting for it to be mined.
    async fn submit_raw_transfer(&self, request: TransferRequest) -> WalletResult<TxHash>;
}

/// A contract write that has been accepted but not yet mined.
#[async_trait(?Send)]
pub trait PendingConfirmation {
    /// Hash of the submitted write.
    fn tx_hash(&self) -> &str;

    /// Suspend until the write is mined. Fails if it reverted.
    async fn confirm(self: Box<Self>) -> ChainResult<()>;
}

/// Read and write entry points of the transactions contract.
#[async_trait(?Send)]
pub trait ContractClient {
    async fn list_transfers(&self) -> ChainResult<Vec<RawTransfer>>;

    async fn transfer_count(&self) -> ChainResult<u64>;

    /// Record a transfer on chain.
    async fn append_transfer(
        &self,
        to: &Account,
        amount: U256,
        message: &str,
        keyword: &str,
    ) -> ChainResult<Box<dyn PendingConfirmation>>;
}
