use connect_core::Chain;
use serde::Serialize;

use crate::client::Client;

/// The chain the active session is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveChain {
    #[serde(flatten)]
    pub chain: Chain,
    /// Not among the active connector's configured chains.
    pub unsupported: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    pub chain: Option<ActiveChain>,
    /// The active connector's chains, or the client's when disconnected.
    pub chains: Vec<Chain>,
}

pub fn get_network(client: &Client) -> Network {
    let state = client.state();
    let chains = match &state.connector {
        Some(connector) => connector.chains().to_vec(),
        None => client.chains().to_vec(),
    };

    let chain = state.data.map(|data| {
        let chain = chains
            .iter()
            .chain(client.chains())
            .find(|chain| chain.id == data.chain.id)
            .cloned()
            .unwrap_or_else(|| Chain::unknown(data.chain.id));
        ActiveChain {
            chain,
            unsupported: data.chain.unsupported,
        }
    });

    Network { chain, chains }
}
