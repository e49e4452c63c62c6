//! Sign and verify EIP-712 typed data through a local wallet connector.
//!
//! Run with:
//! ```
//! WALLET_PRIVATE_KEY=0x... cargo run --example sign_typed_data
//! ```

use std::sync::Arc;

use connectkit::actions::accounts::{self, ConnectArgs};
use connectkit::actions::Client;
use connectkit::connectors::LocalConnector;
use connectkit::core::signing::recover_typed_data_address;
use connectkit::core::{chains, TypedDataRequest, WalletClient};

const MAIL: &str = r#"{
    "domain": {
        "name": "Ether Mail",
        "version": "1",
        "chainId": 1,
        "verifyingContract": "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC"
    },
    "types": {
        "Person": [
            { "name": "name", "type": "string" },
            { "name": "wallet", "type": "address" }
        ],
        "Mail": [
            { "name": "from", "type": "Person" },
            { "name": "to", "type": "Person" },
            { "name": "contents", "type": "string" }
        ]
    },
    "primaryType": "Mail",
    "message": {
        "from": { "name": "Cow", "wallet": "0xCD2a3d9F938E13CD947Ec05AbC7FE734Df8DD826" },
        "to": { "name": "Bob", "wallet": "0xbBbBBBBbbBBBbbbBbbBbbbbBBbBbbbbBbBbbBBbB" },
        "contents": "Hello, Bob!"
    }
}"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("=== Typed Data Signing Demo ===\n");

    // Step 1: Load wallet from environment
    println!("1. Loading wallet from WALLET_PRIVATE_KEY...");
    let wallet = match WalletClient::from_env() {
        Ok(w) => {
            println!("   ✓ Wallet loaded");
            println!("   Address: {}", w.address());
            w
        }
        Err(e) => {
            println!("   ✗ Failed to load wallet: {}", e);
            println!("\n   Make sure WALLET_PRIVATE_KEY is set:");
            println!("   export WALLET_PRIVATE_KEY=0x...");
            return Err(e.into());
        }
    };

    // Step 2: Connect on Goerli, away from the domain's chain
    println!("\n2. Connecting local wallet on Goerli...");
    let client = Client::default();
    let connector = Arc::new(LocalConnector::new(wallet, chains::default_chains()));
    let connected = accounts::connect(
        &client,
        ConnectArgs::new(connector).chain_id(chains::GOERLI_CHAIN_ID),
    )
    .await?;
    println!("   ✓ Connected {} on chain {}", connected.account, connected.chain.id);

    // Step 3: The domain names mainnet, so signing is refused
    println!("\n3. Signing while on the wrong chain...");
    let request = TypedDataRequest::from_json(MAIL)?;
    match accounts::sign_typed_data(&client, &request).await {
        Ok(_) => println!("   ✗ Unexpectedly signed"),
        Err(e) => println!("   ✓ Refused: {}", e),
    }

    // Step 4: Switch and sign
    println!("\n4. Switching to mainnet and signing...");
    let chain = accounts::switch_network(&client, chains::MAINNET_CHAIN_ID).await?;
    println!("   ✓ Now on {}", chain);
    let signature = accounts::sign_typed_data(&client, &request).await?;
    println!("   Digest:    {}", request.signing_hash()?);
    println!("   Signature: {}", signature);

    // Step 5: Recover the signer
    println!("\n5. Recovering signer...");
    let signer = recover_typed_data_address(&request, &signature)?;
    if signer == connected.account {
        println!("   ✓ Recovered {}", signer);
    } else {
        println!("   ✗ Recovered {} (expected {})", signer, connected.account);
    }

    accounts::disconnect(&client).await?;
    println!("\n=== Done ===");
    Ok(())
}
