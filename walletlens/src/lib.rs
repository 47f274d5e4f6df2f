//! WalletLens Core - wallet token and NFT indexing pipeline
//!
//! This library resolves a wallet identifier (hex address or ENS name) to a
//! canonical address, fetches ERC-20 balances and NFT ownership from an
//! external data provider, and normalizes the results into display-ready
//! records. It is the data layer behind the WalletLens dashboards.

pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod provider;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use models::{
    DisplayNft, DisplayToken, QueryFailure, QueryOutcome, QueryStage, ResolvedAddress,
};
pub use pipeline::{Pipeline, PipelineConfig, QuerySequencer};
pub use provider::{AlchemyProvider, ChainDataProvider, ProviderConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
