//! Token balance and metadata types

use serde::{Deserialize, Serialize};

/// Raw contract/balance pair as returned by the provider.
///
/// The balance is the provider's integer string, either decimal or `0x` hex.
/// Transient: discarded after enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTokenBalance {
    pub contract_address: String,
    pub token_balance: String,
}

impl RawTokenBalance {
    /// True when the provider reports the zero representation, in either its
    /// decimal or hex form.
    pub fn is_zero(&self) -> bool {
        self.token_balance == "0" || self.token_balance == "0x0"
    }
}

/// Descriptive token metadata keyed by contract address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
    pub logo: Option<String>,
}

/// Display-ready token entry, one per non-zero balance whose metadata fetch
/// succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayToken {
    pub name: String,
    pub symbol: String,
    pub logo: Option<String>,
    /// Human-readable balance, fixed to 4 fraction digits.
    pub balance: String,
    pub contract_address: String,
    pub decimals: u8,
}

impl DisplayToken {
    /// Etherscan page for the token contract.
    pub fn etherscan_url(&self) -> String {
        format!("https://etherscan.io/token/{}", self.contract_address)
    }
}
