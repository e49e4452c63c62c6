use alloy_primitives::Bytes;
use connect_core::TypedDataRequest;
use tracing::debug;

use crate::client::Client;
use crate::utils::assert_active_chain;
use crate::ActionError;

/// Sign EIP-712 typed data with the active connector.
///
/// Requires an active connector. When the domain names a chain, the session
/// must be on that chain and the connector configured for it. The request is
/// then handed to the connector unchanged and its signature (or error) is
/// returned as is. The registry is only read.
pub async fn sign_typed_data(
    client: &Client,
    request: &TypedDataRequest,
) -> Result<Bytes, ActionError> {
    let state = client.state();
    let connector = state
        .active_connector()
        .ok_or(ActionError::ConnectorNotFound)?;

    if let Some(chain_id) = request.chain_id() {
        assert_active_chain(&state, connector.as_ref(), chain_id)?;
    }

    debug!(
        connector = connector.id(),
        primary_type = %request.primary_type,
        chain_id = ?request.chain_id(),
        "Signing typed data"
    );
    Ok(connector.sign_typed_data(request).await?)
}
