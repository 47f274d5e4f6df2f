//! In-memory provider for pipeline tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use walletlens::error::{Error, Result};
use walletlens::models::{RawNftRecord, RawTokenBalance, ResolvedAddress, TokenMetadata};
use walletlens::provider::ChainDataProvider;

/// Scripted provider: fixed responses, optional failure injection.
#[derive(Default)]
pub struct MockProvider {
    pub names: HashMap<String, String>,
    pub balances: Vec<RawTokenBalance>,
    pub metadata: HashMap<String, TokenMetadata>,
    pub nfts: Vec<RawNftRecord>,
    pub fail_name_lookup: bool,
    pub fail_balances: bool,
    pub fail_nfts: bool,
    pub metadata_calls: AtomicUsize,
}

impl MockProvider {
    pub fn with_name(mut self, name: &str, address: &str) -> Self {
        self.names.insert(name.to_string(), address.to_string());
        self
    }

    pub fn with_balance(mut self, contract: &str, balance: &str) -> Self {
        self.balances.push(RawTokenBalance {
            contract_address: contract.to_string(),
            token_balance: balance.to_string(),
        });
        self
    }

    pub fn with_metadata(mut self, contract: &str, metadata: TokenMetadata) -> Self {
        self.metadata.insert(contract.to_string(), metadata);
        self
    }
}

#[async_trait]
impl ChainDataProvider for MockProvider {
    async fn resolve_name(&self, name: &str) -> Result<Option<String>> {
        if self.fail_name_lookup {
            return Err(Error::Provider("name service unreachable".to_string()));
        }
        Ok(self.names.get(name).cloned())
    }

    async fn token_balances(&self, _address: &ResolvedAddress) -> Result<Vec<RawTokenBalance>> {
        if self.fail_balances {
            return Err(Error::Provider("balance request failed".to_string()));
        }
        Ok(self.balances.clone())
    }

    async fn token_metadata(&self, contract: &str) -> Result<TokenMetadata> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        self.metadata
            .get(contract)
            .cloned()
            .ok_or_else(|| Error::Metadata {
                contract: contract.to_string(),
                message: "no metadata on record".to_string(),
            })
    }

    async fn nfts_for_owner(&self, _address: &ResolvedAddress) -> Result<Vec<RawNftRecord>> {
        if self.fail_nfts {
            return Err(Error::Provider("NFT request failed".to_string()));
        }
        Ok(self.nfts.clone())
    }
}

pub fn metadata(name: &str, symbol: &str, decimals: Option<u8>) -> TokenMetadata {
    TokenMetadata {
        name: Some(name.to_string()),
        symbol: Some(symbol.to_string()),
        decimals,
        logo: None,
    }
}
