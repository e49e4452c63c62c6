use alloy_primitives::Address;
use serde::Serialize;

use crate::client::{Client, ConnectionStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: Option<Address>,
    pub connector_id: Option<String>,
    pub status: ConnectionStatus,
}

impl Account {
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }
}

pub fn get_account(client: &Client) -> Account {
    let state = client.state();
    Account {
        address: state.data.map(|data| data.account),
        connector_id: state.connector.as_ref().map(|c| c.id().to_string()),
        status: state.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::test_utils::*;
    use crate::accounts::{connect, ConnectArgs};

    #[test]
    fn test_disconnected_account() {
        let account = get_account(&Client::default());
        assert_eq!(account.address, None);
        assert_eq!(account.connector_id, None);
        assert!(!account.is_connected());
    }

    #[tokio::test]
    async fn test_connected_account() {
        let client = Client::default();
        connect(&client, ConnectArgs::new(mock_connector())).await.unwrap();

        let account = get_account(&client);
        assert!(account.is_connected());
        assert_eq!(account.address, Some(TEST_ADDRESS.parse().unwrap()));
        assert_eq!(account.connector_id.as_deref(), Some("mock"));

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["status"], "connected");
        assert_eq!(json["connectorId"], "mock");
    }
}
