//! Alchemy-backed provider implementation
//!
//! Token balances, token metadata, and ENS resolution go through the
//! JSON-RPC endpoint; NFT ownership uses the separate REST API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ethers::providers::{Http, Middleware, Provider};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{RawNftRecord, RawTokenBalance, ResolvedAddress, TokenMetadata};

use super::{ChainDataProvider, ProviderConfig};

/// Ethereum mainnet API base
pub const DEFAULT_BASE_URL: &str = "https://eth-mainnet.g.alchemy.com";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenBalancesResponse {
    token_balances: Vec<RawTokenBalance>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OwnedNftsResponse {
    #[serde(default)]
    owned_nfts: Vec<RawNftRecord>,
    page_key: Option<String>,
}

/// Alchemy client shared across all pipeline calls.
pub struct AlchemyProvider {
    rpc: Arc<Provider<Http>>,
    http: reqwest::Client,
    nft_endpoint: String,
}

impl AlchemyProvider {
    /// Create a new provider from configuration.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Provider("API key is required".to_string()))?;

        let base = config.url.trim_end_matches('/');
        let rpc_url = format!("{}/v2/{}", base, api_key);
        let rpc = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| Error::Provider(format!("Failed to create provider: {}", e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let http = builder
            .build()
            .map_err(|e| Error::Provider(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            rpc: Arc::new(rpc),
            http,
            nft_endpoint: format!("{}/nft/v2/{}/getNFTs", base, api_key),
        })
    }
}

#[async_trait]
impl ChainDataProvider for AlchemyProvider {
    async fn resolve_name(&self, name: &str) -> Result<Option<String>> {
        // The RPC layer reports an unregistered name as an error; the
        // resolver treats lookup failure and empty result the same way.
        match self.rpc.resolve_name(name).await {
            Ok(address) => Ok(Some(format!("{:#x}", address))),
            Err(e) => {
                debug!("ENS lookup for {} failed: {}", name, e);
                Ok(None)
            }
        }
    }

    async fn token_balances(&self, address: &ResolvedAddress) -> Result<Vec<RawTokenBalance>> {
        let response: TokenBalancesResponse = self
            .rpc
            .request("alchemy_getTokenBalances", [address.as_str(), "erc20"])
            .await
            .map_err(|e| Error::Provider(format!("Failed to get token balances: {}", e)))?;

        Ok(response.token_balances)
    }

    async fn token_metadata(&self, contract: &str) -> Result<TokenMetadata> {
        self.rpc
            .request("alchemy_getTokenMetadata", [contract])
            .await
            .map_err(|e| Error::Metadata {
                contract: contract.to_string(),
                message: e.to_string(),
            })
    }

    async fn nfts_for_owner(&self, address: &ResolvedAddress) -> Result<Vec<RawNftRecord>> {
        let mut owned = Vec::new();
        let mut page_key: Option<String> = None;

        loop {
            let mut request = self
                .http
                .get(&self.nft_endpoint)
                .query(&[("owner", address.as_str())]);
            if let Some(key) = &page_key {
                request = request.query(&[("pageKey", key.as_str())]);
            }

            let response = request
                .send()
                .await
                .map_err(|e| Error::Provider(format!("Failed to get NFTs: {}", e)))?
                .error_for_status()
                .map_err(|e| Error::Provider(format!("NFT request failed: {}", e)))?;

            let page: OwnedNftsResponse = response
                .json()
                .await
                .map_err(|e| Error::Provider(format!("Failed to decode NFT response: {}", e)))?;

            owned.extend(page.owned_nfts);

            match page.page_key {
                Some(key) => page_key = Some(key),
                None => break,
            }
        }

        Ok(owned)
    }
}
