//! connectkit CLI
//!
//! Signs EIP-712 typed data and personal messages with a locally held key,
//! going through the same connection checks as library callers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use actions::{accounts, Client, ConnectArgs};
use alloy_primitives::Bytes;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use connect_core::config::Config;
use connect_core::signing::recover_typed_data_address;
use connect_core::{TypedDataRequest, WalletClient};
use connectors::LocalConnector;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "connectkit", version, about = "Wallet connection and typed data signing")]
struct Cli {
    /// Configuration file, layered under CONNECTKIT__* environment variables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Chain to connect on (defaults to the configured chain)
    #[arg(long, global = true)]
    chain_id: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the wallet address
    Address,

    /// Sign a personal message (EIP-191)
    SignMessage { message: String },

    /// Sign an eth_signTypedData_v4 JSON payload
    SignTypedData {
        #[arg(long)]
        file: PathBuf,

        /// Switch to the domain's chain before signing
        #[arg(long)]
        switch: bool,
    },

    /// Recover the signer of a typed data signature
    Recover {
        #[arg(long)]
        file: PathBuf,

        #[arg(long)]
        signature: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "connectkit=info,actions=info,connectors=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed arguments");

    if let Command::Recover { file, signature } = &cli.command {
        let request = read_request(file)?;
        let signature = decode_signature(signature)?;
        let address = recover_typed_data_address(&request, &signature)
            .context("Failed to recover signer")?;
        println!("{}", address);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::from_env(),
    }
    .context("Failed to load configuration")?;

    let client = connect_wallet(&config, cli.chain_id).await?;
    run_and_disconnect(&client, cli.command).await
}

/// Run `command`, then close the session. The command's own error wins over
/// a failed disconnect.
async fn run_and_disconnect(client: &Client, command: Command) -> Result<()> {
    let result = run(client, command).await;
    if let Err(err) = accounts::disconnect(client).await {
        warn!(error = %err, "Failed to disconnect wallet");
    }
    result
}

/// Run a command that needs a connected wallet.
async fn run(client: &Client, command: Command) -> Result<()> {
    match command {
        Command::Address => {
            let account = accounts::get_account(client);
            match account.address {
                Some(address) => println!("{}", address),
                None => bail!("wallet is not connected"),
            }
        }
        Command::SignMessage { message } => {
            let signature = accounts::sign_message(client, message.as_bytes()).await?;
            println!("{}", signature);
        }
        Command::SignTypedData { file, switch } => {
            let request = read_request(&file)?;
            if switch {
                if let Some(chain_id) = request.chain_id() {
                    if client.chain_id() != Some(chain_id) {
                        let chain = accounts::switch_network(client, chain_id).await?;
                        info!(chain = %chain, "Switched to the domain's chain");
                    }
                }
            }
            let signature = accounts::sign_typed_data(client, &request).await?;
            println!("{}", signature);
        }
        Command::Recover { .. } => bail!("recover does not use a wallet"),
    }
    Ok(())
}

/// Build a local connector from configuration and connect it.
async fn connect_wallet(config: &Config, chain_id: Option<u64>) -> Result<Client> {
    let private_key = config
        .wallet
        .private_key
        .as_deref()
        .context("WALLET_PRIVATE_KEY is not set")?;
    let wallet = WalletClient::from_private_key(private_key)?;

    let chains = config.chains()?;
    let mut connector = LocalConnector::new(wallet, chains.clone());
    if config.connector.no_switch_chain {
        connector = connector.without_switch_chain();
    }

    let client = Client::new(chains);
    let chain_id = chain_id.unwrap_or(config.chain.default_chain_id);
    let connected = accounts::connect(&client, ConnectArgs::new(Arc::new(connector)).chain_id(chain_id))
        .await
        .with_context(|| format!("Failed to connect on chain {}", chain_id))?;

    info!(account = %connected.account, chain_id = connected.chain.id, "Wallet ready");
    Ok(client)
}

fn read_request(path: &Path) -> Result<TypedDataRequest> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    TypedDataRequest::from_json(&json)
        .with_context(|| format!("Invalid typed data in {}", path.display()))
}

fn decode_signature(signature: &str) -> Result<Bytes> {
    let bytes = hex::decode(signature.trim().trim_start_matches("0x"))
        .context("Signature is not valid hex")?;
    if bytes.len() != 65 {
        bail!("Signature must be 65 bytes, got {}", bytes.len());
    }
    Ok(Bytes::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sign_typed_data() {
        let cli = Cli::parse_from([
            "connectkit",
            "--chain-id",
            "5",
            "sign-typed-data",
            "--file",
            "mail.json",
            "--switch",
        ]);
        assert_eq!(cli.chain_id, Some(5));
        match cli.command {
            Command::SignTypedData { file, switch } => {
                assert_eq!(file, PathBuf::from("mail.json"));
                assert!(switch);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_decode_signature() {
        let hex = format!("0x{}", "ab".repeat(65));
        assert_eq!(decode_signature(&hex).unwrap().len(), 65);
        assert!(decode_signature("0x1234").is_err());
        assert!(decode_signature("not hex").is_err());
    }

    fn test_config() -> Config {
        serde_json::from_value(serde_json::json!({
            "wallet": {
                "private_key": "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
            },
            "chain": { "default_chain_id": 5, "chain_ids": [1, 5] }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_connect_wallet_from_config() {
        let config = test_config();

        let client = connect_wallet(&config, None).await.unwrap();
        assert_eq!(client.chain_id(), Some(5));

        let err = connect_wallet(&config, Some(137)).await.unwrap_err();
        assert!(err.to_string().contains("chain 137"));
    }

    #[tokio::test]
    async fn test_command_error_survives_disconnect() {
        let client = connect_wallet(&test_config(), None).await.unwrap();

        let command = Command::SignTypedData {
            file: PathBuf::from("does-not-exist.json"),
            switch: false,
        };
        let err = run_and_disconnect(&client, command).await.unwrap_err();

        assert!(err.to_string().contains("Failed to read does-not-exist.json"));
        assert_eq!(client.chain_id(), None);
        assert!(!accounts::get_account(&client).is_connected());
    }

    #[tokio::test]
    async fn test_successful_command_disconnects() {
        let client = connect_wallet(&test_config(), None).await.unwrap();

        let command = Command::SignMessage {
            message: "gm".to_string(),
        };
        run_and_disconnect(&client, command).await.unwrap();

        assert_eq!(client.chain_id(), None);
    }
}
