//! Private-key wallet for message and typed data signing.
//!
//! Provides wallet loading from environment variables, EIP-191 personal
//! message signing and EIP-712 typed data signing.

use alloy_primitives::{Address, Bytes};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use std::str::FromStr;
use tracing::debug;

use crate::typed_data::TypedDataRequest;
use crate::{Error, Result};

/// Environment variable holding the wallet's hex-encoded private key.
pub const PRIVATE_KEY_ENV: &str = "WALLET_PRIVATE_KEY";

/// A wallet with private key access for signing.
///
/// The wallet can be loaded from an environment variable or directly
/// from a hex-encoded private key.
#[derive(Clone)]
pub struct WalletClient {
    signer: PrivateKeySigner,
}

impl WalletClient {
    /// Load wallet from the `WALLET_PRIVATE_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or
    /// if the private key format is invalid.
    pub fn from_env() -> Result<Self> {
        let private_key = std::env::var(PRIVATE_KEY_ENV).map_err(|_| Error::Config {
            message: format!("{} environment variable not set", PRIVATE_KEY_ENV),
        })?;

        Self::from_private_key(&private_key)
    }

    /// Create a wallet from a hex-encoded private key.
    ///
    /// # Arguments
    ///
    /// * `key` - A 64-character hex string, optionally prefixed with "0x"
    pub fn from_private_key(key: &str) -> Result<Self> {
        let key_clean = key.trim().trim_start_matches("0x");

        let signer = PrivateKeySigner::from_str(key_clean).map_err(|_| Error::Key {
            message: "expected 64 hex characters".to_string(),
        })?;

        Ok(Self { signer })
    }

    /// Create a wallet around an existing signer.
    pub fn from_signer(signer: PrivateKeySigner) -> Self {
        Self { signer }
    }

    /// Get the wallet's Ethereum address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign a personal message (EIP-191).
    ///
    /// The message is prefixed with "\x19Ethereum Signed Message:\n{len}"
    /// before hashing.
    pub async fn sign_message(&self, message: &[u8]) -> Result<Bytes> {
        let signature = self.signer.sign_message(message).await?;
        Ok(Bytes::from(signature.as_bytes().to_vec()))
    }

    /// Sign EIP-712 typed data.
    ///
    /// Returns the 65-byte `r ‖ s ‖ v` signature with `v` in {27, 28}.
    pub async fn sign_typed_data(&self, request: &TypedDataRequest) -> Result<Bytes> {
        let digest = request.signing_hash()?;
        debug!(address = %self.address(), primary_type = %request.primary_type, %digest, "Signing typed data");

        let signature = self.signer.sign_hash(&digest).await?;
        Ok(Bytes::from(signature.as_bytes().to_vec()))
    }
}

impl std::fmt::Debug for WalletClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never expose the private key in debug output
        f.debug_struct("WalletClient")
            .field("address", &self.address().to_string())
            .finish()
    }
}
