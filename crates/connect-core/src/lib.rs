//! connectkit core library
//!
//! Chain definitions, EIP-712 typed data requests, the private-key wallet and
//! signature recovery shared by the connectors and actions crates.

pub mod chains;
pub mod config;
pub mod error;
pub mod signing;
pub mod typed_data;

pub use chains::Chain;
pub use error::{Error, Result};
pub use signing::WalletClient;
pub use typed_data::{TypedDataDomain, TypedDataRequest, TypedField};
