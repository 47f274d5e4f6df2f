//! External data provider boundary
//!
//! The pipeline treats the blockchain-data service as an opaque remote
//! collaborator reachable through [`ChainDataProvider`]. One client instance
//! is shared across all calls; it holds no per-query state.

mod alchemy;

pub use alchemy::{AlchemyProvider, DEFAULT_BASE_URL};

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{RawNftRecord, RawTokenBalance, ResolvedAddress, TokenMetadata};

/// Provider configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Provider API base URL
    pub url: String,
    /// API key (if required)
    pub api_key: Option<String>,
    /// Timeout in seconds
    pub timeout: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Some(30),
        }
    }
}

/// Remote blockchain-data service used by the pipeline.
#[async_trait]
pub trait ChainDataProvider: Send + Sync {
    /// Resolve a naming-service label to an address. `None` when the name is
    /// not registered.
    async fn resolve_name(&self, name: &str) -> Result<Option<String>>;

    /// List ERC-20 style balances held by an address.
    async fn token_balances(&self, address: &ResolvedAddress) -> Result<Vec<RawTokenBalance>>;

    /// Fetch descriptive metadata for a token contract.
    async fn token_metadata(&self, contract: &str) -> Result<TokenMetadata>;

    /// List NFTs owned by an address.
    async fn nfts_for_owner(&self, address: &ResolvedAddress) -> Result<Vec<RawNftRecord>>;
}
