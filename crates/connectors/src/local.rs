//! Connector over a locally held private key.

use alloy_primitives::{Address, Bytes};
use connect_core::{Chain, TypedDataRequest, WalletClient};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::connector::{ConnectedChain, Connector, ConnectorData};
use crate::ConnectorError;

/// A connector whose wallet is a private key in this process.
///
/// Unlike browser wallets it can only ever sit on one of its configured
/// chains.
pub struct LocalConnector {
    wallet: WalletClient,
    chains: Vec<Chain>,
    switch_chain: bool,
    session: RwLock<Option<u64>>,
}

impl LocalConnector {
    pub const ID: &'static str = "local";

    pub fn new(wallet: WalletClient, chains: Vec<Chain>) -> Self {
        Self {
            wallet,
            chains,
            switch_chain: true,
            session: RwLock::new(None),
        }
    }

    /// Disable programmatic chain switching.
    pub fn without_switch_chain(mut self) -> Self {
        self.switch_chain = false;
        self
    }

    fn configured(&self, chain_id: u64) -> Result<&Chain, ConnectorError> {
        self.chains
            .iter()
            .find(|chain| chain.id == chain_id)
            .ok_or_else(|| ConnectorError::UnsupportedChain {
                chain_id,
                connector: Self::ID.to_string(),
            })
    }

    async fn require_session(&self) -> Result<u64, ConnectorError> {
        self.session.read().await.ok_or_else(|| ConnectorError::NotConnected {
            connector: Self::ID.to_string(),
        })
    }
}

impl std::fmt::Debug for LocalConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalConnector")
            .field("wallet", &self.wallet)
            .field("chains", &self.chains.iter().map(|c| c.id).collect::<Vec<_>>())
            .finish()
    }
}

#[async_trait::async_trait]
impl Connector for LocalConnector {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Local Wallet"
    }

    fn chains(&self) -> &[Chain] {
        &self.chains
    }

    fn supports_switch_chain(&self) -> bool {
        self.switch_chain
    }

    async fn connect(&self, chain_id: Option<u64>) -> Result<ConnectorData, ConnectorError> {
        let id = match chain_id {
            Some(id) => self.configured(id)?.id,
            None => match self.chains.first() {
                Some(chain) => chain.id,
                None => {
                    warn!("Local connector has no configured chains");
                    return Err(ConnectorError::UnsupportedChain {
                        chain_id: 0,
                        connector: Self::ID.to_string(),
                    });
                }
            },
        };

        *self.session.write().await = Some(id);
        info!(address = %self.wallet.address(), chain_id = id, "Local wallet connected");

        Ok(ConnectorData {
            account: self.wallet.address(),
            chain: ConnectedChain::new(id, &self.chains),
        })
    }

    async fn disconnect(&self) -> Result<(), ConnectorError> {
        *self.session.write().await = None;
        Ok(())
    }

    async fn account(&self) -> Result<Address, ConnectorError> {
        self.require_session().await?;
        Ok(self.wallet.address())
    }

    async fn chain_id(&self) -> Result<u64, ConnectorError> {
        self.require_session().await
    }

    async fn is_authorized(&self) -> bool {
        true
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<Chain, ConnectorError> {
        if !self.switch_chain {
            return Err(ConnectorError::SwitchChainNotSupported {
                connector: self.name().to_string(),
            });
        }
        let chain = self.configured(chain_id)?.clone();

        let mut session = self.session.write().await;
        if session.is_none() {
            return Err(ConnectorError::NotConnected {
                connector: Self::ID.to_string(),
            });
        }
        *session = Some(chain_id);
        Ok(chain)
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Bytes, ConnectorError> {
        self.require_session().await?;
        Ok(self.wallet.sign_message(message).await?)
    }

    async fn sign_typed_data(&self, request: &TypedDataRequest) -> Result<Bytes, ConnectorError> {
        self.require_session().await?;
        Ok(self.wallet.sign_typed_data(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_core::chains;
    use tokio_test::{assert_err, assert_ok};

    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn connector() -> LocalConnector {
        let wallet = WalletClient::from_private_key(TEST_PRIVATE_KEY).unwrap();
        LocalConnector::new(wallet, vec![chains::sepolia(), chains::mainnet()])
    }

    #[tokio::test]
    async fn test_connect_defaults_to_first_chain() {
        let connector = connector();
        let data = connector.connect(None).await.unwrap();
        assert_eq!(data.chain.id, chains::SEPOLIA_CHAIN_ID);
        assert!(!data.chain.unsupported);
    }

    #[tokio::test]
    async fn test_connect_rejects_unconfigured_chain() {
        let connector = connector();
        let err = connector.connect(Some(5)).await.unwrap_err();
        assert!(matches!(err, ConnectorError::UnsupportedChain { chain_id: 5, .. }));
        assert_err!(connector.chain_id().await);
    }

    #[tokio::test]
    async fn test_switch_chain_within_configured() {
        let connector = connector();
        assert_ok!(connector.connect(None).await);

        let chain = connector.switch_chain(1).await.unwrap();
        assert_eq!(chain.name, "Ethereum");
        assert_eq!(connector.chain_id().await.unwrap(), 1);

        assert_err!(connector.switch_chain(137).await);
        assert_eq!(connector.chain_id().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_switch_chain_disabled() {
        let connector = connector().without_switch_chain();
        assert_ok!(connector.connect(None).await);
        assert!(!connector.supports_switch_chain());
        assert!(matches!(
            connector.switch_chain(1).await,
            Err(ConnectorError::SwitchChainNotSupported { .. })
        ));
    }

    #[tokio::test]
    async fn test_switch_chain_requires_session() {
        let connector = connector();
        assert!(matches!(
            connector.switch_chain(1).await,
            Err(ConnectorError::NotConnected { .. })
        ));
    }
}
