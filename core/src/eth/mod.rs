//! Wallet gateway and contract client over EIP-1193.
//!
//! # Modules
//!
//! - [`transport`] - The [`Eip1193`] request trait and the native HTTP transport
//! - [`abi`] - Contract ABI encoding and decoding
//! - [`wallet`] - [`Eip1193Wallet`]
//! - [`contract`] - [`Eip1193Contract`]

pub mod abi;
pub mod contract;
pub mod transport;
pub mod wallet;

#[cfg(test)]
pub(crate) mod testing;

use alloy_primitives::U256;

pub use contract::{Eip1193Contract, PendingReceipt};
pub use transport::Eip1193;
#[cfg(feature = "native")]
pub use transport::HttpTransport;
pub use wallet::Eip1193Wallet;

/// Hex quantity without leading zeros, as JSON-RPC expects (`0x0` for zero).
pub fn to_quantity(value: U256) -> String {
    format!("0x{:x}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_quantity() {
        assert_eq!(to_quantity(U256::ZERO), "0x0");
        assert_eq!(to_quantity(U256::from(21_000u64)), "0x5208");
    }
}
