//! Browser services.
//!
//! # Services
//!
//! - [`ethereum`] - EIP-1193 transport over the injected `window.ethereum`
//! - [`storage`] - localStorage transfer count and `alert` notices

pub mod ethereum;
pub mod storage;

pub use ethereum::*;
pub use storage::*;
