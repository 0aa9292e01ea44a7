//! # Prime - ether transfers recorded on chain
//!
//! Sends ether through an injected wallet and records each transfer (with a
//! message and a keyword) in the Prime transactions contract.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   intents   ┌──────────────────────────┐
//! │  Views / CLI │────────────▶│ TransactionOrchestrator  │
//! └──────▲───────┘             └──┬──────────────────┬────┘
//!        │ snapshots              │                  │
//! ┌──────┴───────────┐   ┌────────▼───────┐  ┌───────▼────────┐
//! │ TransactionStore │   │ WalletGateway  │  │ ContractClient │
//! └──────────────────┘   └────────┬───────┘  └───────┬────────┘
//!                                 └──── EIP-1193 ────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use prime::{eth, FileCountCache, LogNotifier, TransactionOrchestrator, CONTRACT_ADDRESS};
//!
//! let transport = Rc::new(eth::HttpTransport::new("http://127.0.0.1:8545")?);
//! let orchestrator = TransactionOrchestrator::new(
//!     eth::Eip1193Wallet::new(transport.clone()),
//!     eth::Eip1193Contract::new(transport, CONTRACT_ADDRESS),
//!     FileCountCache::new(),
//!     LogNotifier,
//! );
//! orchestrator.startup().await;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Accounts, transfers, send form
//! - [`gateway`] - Wallet and contract traits
//! - [`store`] - UI state container
//! - [`orchestrator`] - Transfer lifecycle flows
//! - [`cache`] - Persisted transfer count
//! - [`notice`] - Blocking user notices
//! - [`config`] - Compiled-in constants and CLI settings
//! - [`eth`] - EIP-1193 implementations of the traits

// Core modules
pub mod error;
pub mod models;

// Seams
pub mod gateway;
pub mod notice;
pub mod cache;

// State
pub mod store;
pub mod orchestrator;

// Configuration
pub mod config;

// Ethereum binding
pub mod eth;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    CacheError, ChainError, ConfigError, ProviderError, TransferError, WalletError,
};

pub use models::{
    format_timestamp, parse_amount, parse_recipient, shorten_address, wei_to_ether, Account, FormField,
    FormFields, RawTransfer, TransferRecord,
};

pub use gateway::{
    ContractClient, PendingConfirmation, TransferRequest, TxHash, WalletGateway,
    TRANSFER_GAS_LIMIT,
};

pub use cache::{CountCache, FileCountCache, MemoryCountCache, COUNT_CACHE_KEY};
pub use notice::{LogNotifier, Notifier, WALLET_MISSING_NOTICE};
pub use store::{TransactionState, TransactionStore};
pub use orchestrator::{ConnectOutcome, SubmitOutcome, TransactionOrchestrator};
pub use config::{Config, CONTRACT_ADDRESS};

pub use alloy_primitives::U256;
