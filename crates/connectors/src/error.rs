//! Connector errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("User rejected request.")]
    UserRejected,

    #[error("Connector \"{connector}\" is not connected")]
    NotConnected { connector: String },

    #[error("\"{connector}\" does not support programmatic chain switching.")]
    SwitchChainNotSupported { connector: String },

    #[error("Chain \"{chain_id}\" is not supported by connector \"{connector}\"")]
    UnsupportedChain { chain_id: u64, connector: String },

    #[error(transparent)]
    Wallet(#[from] connect_core::Error),
}
