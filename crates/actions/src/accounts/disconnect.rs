use tracing::info;

use crate::client::{Client, ConnectionState};
use crate::ActionError;

/// Close the active session, if any, and clear the registry.
pub async fn disconnect(client: &Client) -> Result<(), ActionError> {
    if let Some(connector) = client.state().connector {
        connector.disconnect().await?;
        info!(connector = connector.id(), "Disconnected");
    }

    client.replace(ConnectionState::default());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::test_utils::*;
    use crate::accounts::{connect, ConnectArgs};
    use crate::client::ConnectionStatus;
    use connectors::Connector;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_disconnect() {
        let client = Client::default();
        let connector = mock_connector();
        assert_ok!(connect(&client, ConnectArgs::new(connector.clone())).await);

        assert_ok!(disconnect(&client).await);

        let state = client.state();
        assert_eq!(state.status, ConnectionStatus::Disconnected);
        assert!(state.connector.is_none());
        assert!(state.data.is_none());
        assert_err!(connector.account().await);
    }

    #[tokio::test]
    async fn test_disconnect_when_not_connected() {
        let client = Client::default();
        assert_ok!(disconnect(&client).await);
    }
}
