//! Configuration management for connectkit.

use crate::chains::{self, Chain};
use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub connector: ConnectorConfig,
}

#[derive(Clone, Default, Deserialize)]
pub struct WalletConfig {
    pub private_key: Option<String>,
}

impl std::fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConfig")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    /// Chain to connect to.
    pub default_chain_id: u64,
    /// Chains the connector is configured with.
    pub chain_ids: Vec<u64>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            default_chain_id: chains::MAINNET_CHAIN_ID,
            chain_ids: vec![chains::MAINNET_CHAIN_ID, chains::GOERLI_CHAIN_ID],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectorConfig {
    /// Disallow programmatic chain switching.
    pub no_switch_chain: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = ChainConfig::default();
        Ok(Self {
            wallet: WalletConfig {
                private_key: env::var("WALLET_PRIVATE_KEY").ok(),
            },
            chain: ChainConfig {
                default_chain_id: match env::var("CHAIN_ID") {
                    Ok(value) => parse_chain_id(&value)?,
                    Err(_) => defaults.default_chain_id,
                },
                chain_ids: match env::var("CHAIN_IDS") {
                    Ok(value) => value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(parse_chain_id)
                        .collect::<Result<Vec<_>>>()?,
                    Err(_) => defaults.chain_ids,
                },
            },
            connector: ConnectorConfig {
                no_switch_chain: env::var("NO_SWITCH_CHAIN")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(false),
            },
        })
    }

    /// Load configuration from an optional file layered under
    /// `CONNECTKIT__SECTION__KEY` environment variables.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("CONNECTKIT")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("chain.chain_ids")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Resolve the configured chain ids to chain definitions.
    pub fn chains(&self) -> Result<Vec<Chain>> {
        self.chain
            .chain_ids
            .iter()
            .map(|id| {
                Chain::from_id(*id).ok_or_else(|| Error::Config {
                    message: format!("unknown chain id {}", id),
                })
            })
            .collect()
    }

    /// Load configuration for testing (with defaults).
    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            wallet: WalletConfig {
                private_key: Some(
                    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
                        .to_string(),
                ),
            },
            chain: ChainConfig::default(),
            connector: ConnectorConfig::default(),
        }
    }
}

fn parse_chain_id(value: &str) -> Result<u64> {
    let value = value.trim();
    let parsed = match value.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|_| Error::Config {
        message: format!("invalid chain id \"{}\"", value),
    })
}
