//! Error types for the connectkit core library.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] config::ConfigError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid typed data: {message}")]
    InvalidTypedData { message: String },

    #[error("EIP-712 encoding error: {0}")]
    Eip712(#[from] alloy_dyn_abi::Error),

    #[error("Invalid private key: {message}")]
    Key { message: String },

    #[error("Signing error: {0}")]
    Signer(#[from] alloy_signer::Error),

    #[error("Invalid signature: {0}")]
    Signature(#[from] alloy_primitives::SignatureError),
}

impl Error {
    pub(crate) fn typed_data(message: impl Into<String>) -> Self {
        Self::InvalidTypedData {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
