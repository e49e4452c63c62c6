//! Guards shared by actions.

use connect_core::chains::chain_name;
use connectors::Connector;
use tracing::debug;

use crate::client::ConnectionState;
use crate::ActionError;

/// Check that a request bound to `chain_id` may be served by `connector`.
///
/// Fails when the session sits on another chain, or when `chain_id` is not
/// one of the connector's configured chains. Chain names come from the
/// connector's configuration.
pub fn assert_active_chain(
    state: &ConnectionState,
    connector: &dyn Connector,
    chain_id: u64,
) -> Result<(), ActionError> {
    let chains = connector.chains();

    if let Some(active_chain_id) = state.chain_id() {
        if active_chain_id != chain_id {
            debug!(active_chain_id, chain_id, "Requested chain differs from active chain");
            return Err(ActionError::ChainMismatch {
                active_chain: chain_name(chains, active_chain_id),
                target_chain: chain_name(chains, chain_id),
            });
        }
    }

    if !chains.iter().any(|chain| chain.id == chain_id) {
        return Err(ActionError::ChainNotConfigured {
            chain_id,
            connector_id: connector.id().to_string(),
        });
    }

    Ok(())
}
