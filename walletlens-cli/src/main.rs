//! WalletLens CLI
//!
//! Terminal front end for the indexing pipeline: runs a single query for a
//! wallet address or ENS name and prints the token and NFT holdings.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use walletlens::export::tokens_to_csv;
use walletlens::models::{Notification, NotificationLevel};
use walletlens::provider::DEFAULT_BASE_URL;
use walletlens::{AlchemyProvider, Pipeline, PipelineConfig, ProviderConfig, QueryOutcome};

#[derive(Parser)]
#[command(name = "walletlens", version, about = "Wallet token and NFT indexer")]
struct Cli {
    /// Wallet address or ENS name; falls back to $WALLETLENS_ADDRESS
    identifier: Option<String>,

    /// Provider API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Provider API key; falls back to $ALCHEMY_API_KEY
    #[arg(long)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Cap on concurrent metadata lookups
    #[arg(long, default_value_t = 16)]
    metadata_concurrency: usize,

    /// Write token results as CSV to this file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let identifier = match cli
        .identifier
        .or_else(|| std::env::var("WALLETLENS_ADDRESS").ok())
    {
        Some(identifier) => identifier,
        None => {
            warn!("No wallet given. Pass an address or set WALLETLENS_ADDRESS.");
            return Err(anyhow!("no wallet identifier"));
        }
    };

    let api_key = cli.api_key.or_else(|| std::env::var("ALCHEMY_API_KEY").ok());
    let config = ProviderConfig {
        url: cli.url,
        api_key,
        timeout: cli.timeout,
    };

    let provider = AlchemyProvider::new(&config)?;
    let pipeline = Pipeline::with_config(
        Arc::new(provider),
        PipelineConfig {
            metadata_concurrency: cli.metadata_concurrency,
        },
    );

    info!("Querying {}", identifier);
    let outcome = match pipeline.run(&identifier).await {
        Ok(outcome) => outcome,
        Err(failure) => {
            print_notifications(&failure.notifications);
            return Err(failure.into());
        }
    };

    print_notifications(&outcome.notifications);
    print_outcome(&outcome);

    if let Some(path) = cli.csv {
        std::fs::write(&path, tokens_to_csv(&outcome.tokens))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote CSV to {}", path.display());
    }

    Ok(())
}

fn print_notifications(notifications: &[Notification]) {
    for notification in notifications {
        match notification.level {
            NotificationLevel::Info => info!("{}: {}", notification.title, notification.message),
            NotificationLevel::Warning => {
                warn!("{}: {}", notification.title, notification.message)
            }
            NotificationLevel::Error => {
                error!("{}: {}", notification.title, notification.message)
            }
        }
    }
}

fn print_outcome(outcome: &QueryOutcome) {
    println!("{}", "=".repeat(80));
    println!("WALLET: {}", outcome.address);
    println!("{}", "=".repeat(80));

    if outcome.tokens.is_empty() {
        println!("No ERC-20 tokens found.");
    } else {
        println!("TOKENS ({}):", outcome.tokens.len());
        println!("{}", "-".repeat(80));
        for (i, token) in outcome.tokens.iter().enumerate() {
            println!("{}. {} ({})", i + 1, token.symbol, token.name);
            println!("   Balance: {}", token.balance);
            println!("   Contract: {} (decimals: {})", token.contract_address, token.decimals);
            println!("   {}", token.etherscan_url());
        }
    }

    println!();
    if outcome.nfts.is_empty() {
        println!("No NFTs found.");
    } else {
        println!("NFTS ({}):", outcome.nfts.len());
        println!("{}", "-".repeat(80));
        for (i, nft) in outcome.nfts.iter().enumerate() {
            println!("{}. {} [{}]", i + 1, nft.title, nft.collection_name);
            println!("   Token: {} #{}", nft.token_type, nft.token_id);
            match &nft.image {
                Some(image) => println!("   Image: {}", image),
                None => println!("   Image: (none)"),
            }
            if let Some(floor) = nft.floor_price {
                println!("   Floor: {} ETH", floor);
            }
        }
    }
    println!("{}", "=".repeat(80));
}
