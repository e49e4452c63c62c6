//! Wallet signing and signature recovery.
//!
//! # Architecture
//!
//! ```text
//! TypedDataRequest ── signing_hash ──► B256 digest
//!       │                                  │
//!       ▼                                  ▼
//! WalletClient ──── sign_hash ────► Bytes (r ‖ s ‖ v)
//!                                          │
//!                                          ▼
//!                       recover_typed_data_address ──► Address
//! ```
//!
//! # Example
//!
//! ```ignore
//! use connect_core::{TypedDataRequest, WalletClient};
//! use connect_core::signing::recover_typed_data_address;
//!
//! let wallet = WalletClient::from_env()?;
//! let request = TypedDataRequest::from_json(json)?;
//!
//! let signature = wallet.sign_typed_data(&request).await?;
//! assert_eq!(recover_typed_data_address(&request, &signature)?, wallet.address());
//! ```

pub mod recover;
pub mod wallet;

pub use recover::{recover_message_address, recover_typed_data_address, verify_typed_data};
pub use wallet::WalletClient;
