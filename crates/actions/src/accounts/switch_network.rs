use connect_core::Chain;
use connectors::{ConnectedChain, ConnectorError};
use tracing::info;

use crate::client::Client;
use crate::ActionError;

/// Move the active session to `chain_id`.
pub async fn switch_network(client: &Client, chain_id: u64) -> Result<Chain, ActionError> {
    let connector = client
        .active_connector()
        .ok_or(ActionError::ConnectorNotFound)?;

    if !connector.supports_switch_chain() {
        return Err(ConnectorError::SwitchChainNotSupported {
            connector: connector.name().to_string(),
        }
        .into());
    }

    let chain = connector.switch_chain(chain_id).await?;
    let connected = ConnectedChain::new(chain.id, connector.chains());
    client.modify(|state| {
        if let Some(data) = state.data.as_mut() {
            data.chain = connected;
        }
    });

    info!(connector = connector.id(), chain_id = chain.id, "Switched network");
    Ok(chain)
}
