//! Connection registry.

use std::sync::Arc;

use connect_core::{chains, Chain};
use connectors::{Connector, ConnectorData};
use serde::Serialize;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Snapshot of the registry.
#[derive(Debug, Clone, Default)]
pub struct ConnectionState {
    pub status: ConnectionStatus,
    pub connector: Option<Arc<dyn Connector>>,
    pub data: Option<ConnectorData>,
}

impl ConnectionState {
    /// Chain the active session is on.
    pub fn chain_id(&self) -> Option<u64> {
        self.data.map(|data| data.chain.id)
    }

    /// The connector, if its session is established.
    pub fn active_connector(&self) -> Option<Arc<dyn Connector>> {
        match self.status {
            ConnectionStatus::Connected => self.connector.clone(),
            _ => None,
        }
    }
}

/// Holds at most one active connector and its negotiated chain.
///
/// Reads take a snapshot; connect, disconnect and switch network replace it.
/// Observers can follow changes through [`Client::subscribe`].
pub struct Client {
    chains: Vec<Chain>,
    state: watch::Sender<ConnectionState>,
}

impl Client {
    /// Create a client that knows about `chains` while disconnected.
    pub fn new(chains: Vec<Chain>) -> Self {
        let (state, _) = watch::channel(ConnectionState::default());
        Self { chains, state }
    }

    /// Chains configured on the client.
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Current registry snapshot.
    pub fn state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    /// The connector whose session is established.
    pub fn active_connector(&self) -> Option<Arc<dyn Connector>> {
        self.state.borrow().active_connector()
    }

    /// Chain the active session is on.
    pub fn chain_id(&self) -> Option<u64> {
        self.state.borrow().chain_id()
    }

    /// Follow registry changes.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    pub(crate) fn replace(&self, state: ConnectionState) -> ConnectionState {
        self.state.send_replace(state)
    }

    pub(crate) fn modify(&self, f: impl FnOnce(&mut ConnectionState)) {
        self.state.send_modify(f);
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(chains::default_chains())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("chains", &self.chains.iter().map(|c| c.id).collect::<Vec<_>>())
            .field("state", &*self.state.borrow())
            .finish()
    }
}
