use alloy_primitives::Bytes;
use tracing::debug;

use crate::client::Client;
use crate::ActionError;

/// Sign an EIP-191 personal message with the active connector.
pub async fn sign_message(client: &Client, message: &[u8]) -> Result<Bytes, ActionError> {
    let connector = client
        .active_connector()
        .ok_or(ActionError::ConnectorNotFound)?;

    debug!(connector = connector.id(), len = message.len(), "Signing message");
    Ok(connector.sign_message(message).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::test_utils::*;
    use crate::accounts::{connect, ConnectArgs};
    use connect_core::signing::recover_message_address;

    #[tokio::test]
    async fn test_not_connected() {
        let err = sign_message(&Client::default(), b"gm").await.unwrap_err();
        assert_eq!(err.to_string(), "Connector not found");
    }

    #[tokio::test]
    async fn test_sign_and_recover() {
        let client = Client::default();
        connect(&client, ConnectArgs::new(mock_connector())).await.unwrap();

        let signature = sign_message(&client, b"hello world").await.unwrap();

        let signer = recover_message_address(b"hello world", &signature).unwrap();
        assert_eq!(signer.to_string(), TEST_ADDRESS);
    }
}
