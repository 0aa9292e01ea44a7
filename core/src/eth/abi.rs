//! ABI of the Prime transactions contract.
//!
//! ```solidity
//! struct TransferStruct {
//!     address sender;
//!     address receiver;
//!     uint amount;
//!     string message;
//!     uint256 timestamp;
//!     string keyword;
//! }
//! ```

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{sol, SolCall};

use crate::error::{ChainError, ChainResult};
use crate::models::RawTransfer;

sol! {
    struct TransferStruct {
        address sender;
        address receiver;
        uint256 amount;
        string message;
        uint256 timestamp;
        string keyword;
    }

    function addToBlockchain(address receiver, uint256 amount, string message, string keyword);
    function getAlltransactions() returns (TransferStruct[]);
    function getTransactionCount() returns (uint256);
}

impl From<TransferStruct> for RawTransfer {
    fn from(t: TransferStruct) -> Self {
        Self {
            sender: t.sender.to_checksum(None),
            receiver: t.receiver.to_checksum(None),
            amount: t.amount,
            message: t.message,
            timestamp: t.timestamp.saturating_to::<u64>(),
            keyword: t.keyword,
        }
    }
}

/// Parse a hex address argument.
pub fn parse_address(address: &str) -> ChainResult<Address> {
    address
        .trim()
        .parse::<Address>()
        .map_err(|_| ChainError::InvalidAddress(address.to_string()))
}

pub fn encode_add_to_blockchain(
    receiver: Address,
    amount: U256,
    message: &str,
    keyword: &str,
) -> Bytes {
    addToBlockchainCall {
        receiver,
        amount,
        message: message.to_string(),
        keyword: keyword.to_string(),
    }
    .abi_encode()
    .into()
}

pub fn encode_get_all_transactions() -> Bytes {
    getAlltransactionsCall {}.abi_encode().into()
}

pub fn encode_get_transaction_count() -> Bytes {
    getTransactionCountCall {}.abi_encode().into()
}

pub fn decode_all_transactions(data: &[u8]) -> ChainResult<Vec<RawTransfer>> {
    let transfers = getAlltransactionsCall::abi_decode_returns(data)
        .map_err(|e| ChainError::Abi(e.to_string()))?;
    Ok(transfers.into_iter().map(RawTransfer::from).collect())
}

pub fn decode_transaction_count(data: &[u8]) -> ChainResult<u64> {
    let count = getTransactionCountCall::abi_decode_returns(data)
        .map_err(|e| ChainError::Abi(e.to_string()))?;
    Ok(count.saturating_to::<u64>())
}
