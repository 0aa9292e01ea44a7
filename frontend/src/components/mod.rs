//! UI Components for the Prime application.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with wallet connection
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`Welcome`] - Send form
//! - [`Transactions`] - Transfer history
//! - [`Loader`] - Spinner while a record is mined

mod header;
mod welcome;
mod transactions;
mod loader;
mod footer;

pub use header::*;
pub use welcome::*;
pub use transactions::*;
pub use loader::*;
pub use footer::*;
