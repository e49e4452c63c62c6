use std::sync::Arc;

use alloy_primitives::Address;
use connectors::{ConnectedChain, Connector};
use serde::Serialize;
use tracing::{info, warn};

use crate::client::{Client, ConnectionState, ConnectionStatus};
use crate::ActionError;

pub struct ConnectArgs {
    pub connector: Arc<dyn Connector>,
    /// Chain to connect on; the wallet's current chain when `None`.
    pub chain_id: Option<u64>,
}

impl ConnectArgs {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self {
            connector,
            chain_id: None,
        }
    }

    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectResult {
    pub account: Address,
    pub chain: ConnectedChain,
    pub connector_id: String,
}

/// Activate `args.connector`, replacing any other active connector.
pub async fn connect(client: &Client, args: ConnectArgs) -> Result<ConnectResult, ActionError> {
    let previous = client.state();
    if let Some(active) = previous.active_connector() {
        if active.id() == args.connector.id() {
            return Err(ActionError::ConnectorAlreadyConnected);
        }
    }

    client.modify(|state| state.status = ConnectionStatus::Connecting);

    let data = match args.connector.connect(args.chain_id).await {
        Ok(data) => data,
        Err(err) => {
            warn!(connector = args.connector.id(), error = %err, "Connect failed");
            client.replace(previous);
            return Err(err.into());
        }
    };

    info!(
        connector = args.connector.id(),
        account = %data.account,
        chain_id = data.chain.id,
        unsupported = data.chain.unsupported,
        "Connected"
    );

    let result = ConnectResult {
        account: data.account,
        chain: data.chain,
        connector_id: args.connector.id().to_string(),
    };
    client.replace(ConnectionState {
        status: ConnectionStatus::Connected,
        connector: Some(args.connector),
        data: Some(data),
    });

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::test_utils::*;
    use connectors::{ConnectorError, MockFlags};

    #[tokio::test]
    async fn test_connect() {
        let client = Client::default();

        let result = connect(&client, ConnectArgs::new(mock_connector())).await.unwrap();

        assert_eq!(result.account, TEST_ADDRESS.parse::<Address>().unwrap());
        assert_eq!(result.chain, ConnectedChain { id: 1, unsupported: false });
        assert_eq!(result.connector_id, "mock");

        let state = client.state();
        assert_eq!(state.status, ConnectionStatus::Connected);
        assert_eq!(state.chain_id(), Some(1));
    }

    #[tokio::test]
    async fn test_connect_with_chain_id() {
        let client = Client::default();

        let result = connect(&client, ConnectArgs::new(mock_connector()).chain_id(69_420))
            .await
            .unwrap();

        assert!(result.chain.unsupported);
        assert_eq!(client.chain_id(), Some(69_420));
    }

    #[tokio::test]
    async fn test_already_connected() {
        let client = Client::default();
        let connector = mock_connector();
        connect(&client, ConnectArgs::new(connector.clone())).await.unwrap();

        let err = connect(&client, ConnectArgs::new(connector)).await.unwrap_err();
        assert_eq!(err.to_string(), "Connector already connected");
    }

    #[tokio::test]
    async fn test_rejected_connect_restores_state() {
        let client = Client::default();
        let connector = mock_connector_with(MockFlags {
            fail_connect: true,
            ..Default::default()
        });

        let err = connect(&client, ConnectArgs::new(connector)).await.unwrap_err();

        assert!(matches!(err, ActionError::Connector(ConnectorError::UserRejected)));
        assert_eq!(client.state().status, ConnectionStatus::Disconnected);
        assert!(client.active_connector().is_none());
    }
}
