//! The connector abstraction.

use alloy_primitives::{Address, Bytes};
use connect_core::{Chain, TypedDataRequest};
use serde::Serialize;

use crate::ConnectorError;

/// Chain a connector is bound to after connecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectedChain {
    pub id: u64,
    /// True when `id` is not among the connector's configured chains.
    pub unsupported: bool,
}

impl ConnectedChain {
    pub fn new(id: u64, chains: &[Chain]) -> Self {
        Self {
            id,
            unsupported: !chains.iter().any(|chain| chain.id == id),
        }
    }
}

/// Session data returned by [`Connector::connect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectorData {
    pub account: Address,
    pub chain: ConnectedChain,
}

/// A wallet session provider.
///
/// Implementations keep their own session state; the client only tracks
/// which connector is active.
#[async_trait::async_trait]
pub trait Connector: Send + Sync {
    /// Stable identifier, e.g. `"mock"`.
    fn id(&self) -> &str;

    /// Display name, e.g. `"Mock"`.
    fn name(&self) -> &str;

    /// Chains this connector is configured for.
    fn chains(&self) -> &[Chain];

    /// Whether [`Connector::switch_chain`] is available.
    fn supports_switch_chain(&self) -> bool {
        false
    }

    /// Open a session, optionally on a specific chain.
    async fn connect(&self, chain_id: Option<u64>) -> Result<ConnectorData, ConnectorError>;

    /// Close the session.
    async fn disconnect(&self) -> Result<(), ConnectorError>;

    /// Account of the open session.
    async fn account(&self) -> Result<Address, ConnectorError>;

    /// Chain of the open session.
    async fn chain_id(&self) -> Result<u64, ConnectorError>;

    /// Whether the wallet has already authorized this connector.
    async fn is_authorized(&self) -> bool;

    /// Move the session to another chain.
    async fn switch_chain(&self, _chain_id: u64) -> Result<Chain, ConnectorError> {
        Err(ConnectorError::SwitchChainNotSupported {
            connector: self.name().to_string(),
        })
    }

    /// Sign an EIP-191 personal message.
    async fn sign_message(&self, message: &[u8]) -> Result<Bytes, ConnectorError>;

    /// Sign EIP-712 typed data.
    async fn sign_typed_data(&self, request: &TypedDataRequest) -> Result<Bytes, ConnectorError>;
}

impl std::fmt::Debug for dyn Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connector")
            .field("id", &self.id())
            .field("name", &self.name())
            .finish()
    }
}
