//! Deterministic connector for tests and demos.
//!
//! Backed by a local private-key wallet. Flags make it misbehave the way real
//! wallets do (rejecting connection, refusing to switch chains).

use alloy_primitives::{Address, Bytes};
use connect_core::chains;
use connect_core::{Chain, TypedDataRequest, WalletClient};
use tokio::sync::RwLock;
use tracing::debug;

use crate::connector::{ConnectedChain, Connector, ConnectorData};
use crate::ConnectorError;

/// Failure switches for [`MockConnector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MockFlags {
    /// Reject every connect attempt.
    pub fail_connect: bool,
    /// Reject every chain switch.
    pub fail_switch_chain: bool,
    /// Report the wallet as already authorized.
    pub is_authorized: bool,
    /// Do not offer chain switching at all.
    pub no_switch_chain: bool,
}

#[derive(Debug, Clone)]
pub struct MockOptions {
    pub wallet: WalletClient,
    /// Chain the wallet sits on when connect is called without one.
    pub chain_id: u64,
    pub flags: MockFlags,
}

impl MockOptions {
    pub fn new(wallet: WalletClient) -> Self {
        Self {
            wallet,
            chain_id: chains::MAINNET_CHAIN_ID,
            flags: MockFlags::default(),
        }
    }

    pub fn flags(mut self, flags: MockFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }
}

pub struct MockConnector {
    chains: Vec<Chain>,
    options: MockOptions,
    /// Chain of the open session; `None` while disconnected.
    session: RwLock<Option<u64>>,
}

impl MockConnector {
    pub const ID: &'static str = "mock";

    /// Create a mock configured for mainnet and Goerli.
    pub fn new(options: MockOptions) -> Self {
        Self::with_chains(chains::default_chains(), options)
    }

    pub fn with_chains(chains: Vec<Chain>, options: MockOptions) -> Self {
        Self {
            chains,
            options,
            session: RwLock::new(None),
        }
    }

    async fn session_chain(&self) -> Result<u64, ConnectorError> {
        self.session.read().await.ok_or_else(|| ConnectorError::NotConnected {
            connector: Self::ID.to_string(),
        })
    }

    fn chain_or_placeholder(&self, chain_id: u64) -> Chain {
        self.chains
            .iter()
            .find(|chain| chain.id == chain_id)
            .cloned()
            .unwrap_or_else(|| Chain::unknown(chain_id))
    }
}

impl std::fmt::Debug for MockConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockConnector")
            .field("wallet", &self.options.wallet)
            .field("flags", &self.options.flags)
            .finish()
    }
}

#[async_trait::async_trait]
impl Connector for MockConnector {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Mock"
    }

    fn chains(&self) -> &[Chain] {
        &self.chains
    }

    fn supports_switch_chain(&self) -> bool {
        !self.options.flags.no_switch_chain
    }

    async fn connect(&self, chain_id: Option<u64>) -> Result<ConnectorData, ConnectorError> {
        if self.options.flags.fail_connect {
            return Err(ConnectorError::UserRejected);
        }

        let id = chain_id.unwrap_or(self.options.chain_id);
        *self.session.write().await = Some(id);
        debug!(chain_id = id, "Mock connector connected");

        Ok(ConnectorData {
            account: self.options.wallet.address(),
            chain: ConnectedChain::new(id, &self.chains),
        })
    }

    async fn disconnect(&self) -> Result<(), ConnectorError> {
        *self.session.write().await = None;
        Ok(())
    }

    async fn account(&self) -> Result<Address, ConnectorError> {
        self.session_chain().await?;
        Ok(self.options.wallet.address())
    }

    async fn chain_id(&self) -> Result<u64, ConnectorError> {
        self.session_chain().await
    }

    async fn is_authorized(&self) -> bool {
        self.options.flags.is_authorized
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<Chain, ConnectorError> {
        if self.options.flags.no_switch_chain {
            return Err(ConnectorError::SwitchChainNotSupported {
                connector: self.name().to_string(),
            });
        }
        if self.options.flags.fail_switch_chain {
            return Err(ConnectorError::UserRejected);
        }

        let mut session = self.session.write().await;
        if session.is_none() {
            return Err(ConnectorError::NotConnected {
                connector: Self::ID.to_string(),
            });
        }
        *session = Some(chain_id);

        Ok(self.chain_or_placeholder(chain_id))
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Bytes, ConnectorError> {
        self.session_chain().await?;
        Ok(self.options.wallet.sign_message(message).await?)
    }

    async fn sign_typed_data(&self, request: &TypedDataRequest) -> Result<Bytes, ConnectorError> {
        self.session_chain().await?;
        Ok(self.options.wallet.sign_typed_data(request).await?)
    }
}
