//! Wallet actions over a connection registry.
//!
//! [`Client`] holds the active connector and its negotiated chain. The
//! functions in [`accounts`] read it (and, for connect/disconnect/switch,
//! replace it) and delegate to the connector.
//!
//! ```ignore
//! use actions::{accounts, Client, ConnectArgs};
//!
//! let client = Client::default();
//! accounts::connect(&client, ConnectArgs::new(connector)).await?;
//! let signature = accounts::sign_typed_data(&client, &request).await?;
//! ```

pub mod accounts;
pub mod client;
pub mod error;
pub mod utils;

pub use accounts::{Account, ActiveChain, ConnectArgs, ConnectResult, Network};
pub use client::{Client, ConnectionState, ConnectionStatus};
pub use error::ActionError;
