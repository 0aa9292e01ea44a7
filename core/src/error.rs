//! Error types for the transfer lifecycle.
//!
//! - [`ProviderError`] - Raw failures reported by an EIP-1193 provider
//! - [`WalletError`] - Wallet gateway failures
//! - [`ChainError`] - Contract read/write and confirmation failures
//! - [`TransferError`] - Top-level errors of the submit and connect flows
//! - [`CacheError`] - Persisted transfer count failures
//! - [`ConfigError`] - Invalid environment configuration
//!
//! Conversions into [`TransferError`] are provided via `From`, so `?`
//! works across the gateway and contract boundaries.

use thiserror::Error;

use crate::models::FormField;

/// EIP-1193 error code for "the user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

// =============================================================================
// Provider Errors
// =============================================================================

/// A failed `request` call on an EIP-1193 provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("provider error {code}: {message}")]
pub struct ProviderError {
    /// JSON-RPC or EIP-1193 error code.
    pub code: i64,
    /// Human-readable message from the provider.
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Error raised by the transport itself rather than the remote end.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(-32603, message)
    }

    /// Whether the user declined the wallet prompt.
    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED_CODE
    }
}

// =============================================================================
// Wallet Errors
// =============================================================================

/// Errors from the wallet gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No injected wallet object was found.
    #[error("No wallet extension found")]
    Unavailable,

    /// The user declined the wallet prompt.
    #[error("Request rejected by the user")]
    UserRejected,

    /// The provider failed for another reason.
    #[error("Wallet provider failed: {0}")]
    Provider(ProviderError),

    /// The provider answered with something unexpected.
    #[error("Unexpected wallet response: {0}")]
    InvalidResponse(String),
}

impl From<ProviderError> for WalletError {
    fn from(err: ProviderError) -> Self {
        if err.is_user_rejection() {
            WalletError::UserRejected
        } else {
            WalletError::Provider(err)
        }
    }
}

// =============================================================================
// Chain Errors
// =============================================================================

/// Errors from contract calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The node or wallet failed the call.
    #[error("Contract call failed: {0}")]
    Provider(#[from] ProviderError),

    /// The write was mined but reverted.
    #[error("Transaction {0} reverted")]
    Reverted(String),

    /// Return data could not be decoded against the contract ABI.
    #[error("ABI decoding failed: {0}")]
    Abi(String),

    /// An address argument was not a valid hex address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The node answered with something unexpected.
    #[error("Unexpected node response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Transfer Errors (top-level)
// =============================================================================

/// Errors returned by the orchestrator flows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The amount is not a decimal ether value.
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    /// A required form field is empty.
    #[error("Missing form field: {0}")]
    MissingField(FormField),

    /// The recipient is not a hex address.
    #[error("Invalid recipient address '{0}'")]
    InvalidRecipient(String),

    /// No account is connected.
    #[error("No wallet account connected")]
    NoAccount,

    /// Another transfer is still being sent or confirmed.
    #[error("A transfer is already in progress")]
    Busy,

    /// Wallet gateway error.
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    /// Contract error.
    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),
}

impl TransferError {
    /// Whether the user declined a wallet prompt somewhere in the flow.
    pub fn is_user_rejection(&self) -> bool {
        match self {
            TransferError::Wallet(WalletError::UserRejected) => true,
            TransferError::Chain(ChainError::Provider(err)) => err.is_user_rejection(),
            _ => false,
        }
    }
}

// =============================================================================
// Cache Errors
// =============================================================================

/// Errors from the persisted transfer count.
#[derive(Debug, Error)]
pub enum CacheError {
    /// IO error.
    #[error("Cache IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage backend refused the write.
    #[error("Cache storage unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Result type for contract operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Result type for orchestrator flows.
pub type TransferResult<T> = Result<T, TransferError>;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;
