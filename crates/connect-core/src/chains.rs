//! Chain definitions.
//!
//! A chain is identified by its EIP-155 id; the human-readable name is what
//! error messages and the CLI show to users.

use serde::{Deserialize, Serialize};

/// Chain ID for Ethereum mainnet.
pub const MAINNET_CHAIN_ID: u64 = 1;

/// Chain ID for the Goerli testnet.
pub const GOERLI_CHAIN_ID: u64 = 5;

/// Chain ID for the Sepolia testnet.
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// Chain ID for OP Mainnet.
pub const OPTIMISM_CHAIN_ID: u64 = 10;

/// Chain ID for Polygon PoS.
pub const POLYGON_CHAIN_ID: u64 = 137;

/// Chain ID for Arbitrum One.
pub const ARBITRUM_CHAIN_ID: u64 = 42_161;

/// Chain ID for a local Foundry/Anvil node.
pub const FOUNDRY_CHAIN_ID: u64 = 31_337;

/// Native currency of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl NativeCurrency {
    fn new(name: &str, symbol: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: 18,
        }
    }

    fn ether() -> Self {
        Self::new("Ether", "ETH")
    }
}

/// A network a connector can be bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    /// EIP-155 chain id.
    pub id: u64,
    /// Human-readable name, e.g. "Ethereum".
    pub name: String,
    /// Short network key, e.g. "homestead".
    pub network: String,
    pub native_currency: NativeCurrency,
    #[serde(default)]
    pub testnet: bool,
}

impl Chain {
    /// Create a chain with custom parameters.
    pub fn custom(
        id: u64,
        name: impl Into<String>,
        network: impl Into<String>,
        native_currency: NativeCurrency,
        testnet: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            network: network.into(),
            native_currency,
            testnet,
        }
    }

    /// Placeholder for an id no chain list knows about.
    pub fn unknown(id: u64) -> Self {
        Self::custom(id, format!("Chain {}", id), id.to_string(), NativeCurrency::ether(), false)
    }

    /// Look up a built-in chain by id.
    pub fn from_id(id: u64) -> Option<Self> {
        all().into_iter().find(|chain| chain.id == id)
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

pub fn mainnet() -> Chain {
    Chain::custom(MAINNET_CHAIN_ID, "Ethereum", "homestead", NativeCurrency::ether(), false)
}

pub fn goerli() -> Chain {
    Chain::custom(
        GOERLI_CHAIN_ID,
        "Goerli",
        "goerli",
        NativeCurrency::new("Goerli Ether", "ETH"),
        true,
    )
}

pub fn sepolia() -> Chain {
    Chain::custom(
        SEPOLIA_CHAIN_ID,
        "Sepolia",
        "sepolia",
        NativeCurrency::new("Sepolia Ether", "SEP"),
        true,
    )
}

pub fn optimism() -> Chain {
    Chain::custom(OPTIMISM_CHAIN_ID, "OP Mainnet", "optimism", NativeCurrency::ether(), false)
}

pub fn polygon() -> Chain {
    Chain::custom(
        POLYGON_CHAIN_ID,
        "Polygon",
        "matic",
        NativeCurrency::new("MATIC", "MATIC"),
        false,
    )
}

pub fn arbitrum() -> Chain {
    Chain::custom(ARBITRUM_CHAIN_ID, "Arbitrum One", "arbitrum", NativeCurrency::ether(), false)
}

pub fn foundry() -> Chain {
    Chain::custom(FOUNDRY_CHAIN_ID, "Foundry", "foundry", NativeCurrency::ether(), true)
}

/// Every built-in chain.
pub fn all() -> Vec<Chain> {
    vec![
        mainnet(),
        goerli(),
        sepolia(),
        optimism(),
        polygon(),
        arbitrum(),
        foundry(),
    ]
}

/// Chains a connector is configured with when none are given.
pub fn default_chains() -> Vec<Chain> {
    vec![mainnet(), goerli()]
}

/// Display name for `chain_id` among `chains`, falling back to `Chain <id>`.
pub fn chain_name(chains: &[Chain], chain_id: u64) -> String {
    chains
        .iter()
        .find(|chain| chain.id == chain_id)
        .map(|chain| chain.name.clone())
        .unwrap_or_else(|| format!("Chain {}", chain_id))
}
