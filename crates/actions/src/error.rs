//! Errors surfaced by wallet actions.

use connectors::ConnectorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Connector not found")]
    ConnectorNotFound,

    #[error("Connector already connected")]
    ConnectorAlreadyConnected,

    #[error("Chain mismatch: Expected \"{target_chain}\", received \"{active_chain}\".")]
    ChainMismatch {
        active_chain: String,
        target_chain: String,
    },

    #[error("Chain \"{chain_id}\" not configured for connector \"{connector_id}\".")]
    ChainNotConfigured { chain_id: u64, connector_id: String },

    /// Raised by the connector itself; passed through untouched.
    #[error(transparent)]
    Connector(#[from] ConnectorError),
}
