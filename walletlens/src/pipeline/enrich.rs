//! Token metadata enrichment

use ethers::core::types::U256;
use futures::stream::{self, StreamExt};
use tracing::warn;

use crate::models::{DisplayToken, RawTokenBalance, TokenMetadata};
use crate::provider::ChainDataProvider;

/// Decimals assumed when the provider omits them.
const DEFAULT_DECIMALS: u8 = 18;

/// Enrich non-zero balances with metadata, preserving input order.
///
/// Lookups run concurrently up to `concurrency` at a time; results are
/// collected positionally, never in completion order. A failed lookup drops
/// only its own entry: one bad contract must not block display of the
/// others.
pub(crate) async fn enrich_balances(
    provider: &dyn ChainDataProvider,
    balances: &[RawTokenBalance],
    concurrency: usize,
) -> Vec<DisplayToken> {
    let limit = concurrency.max(1);

    stream::iter(balances)
        .map(|balance| async move {
            match provider.token_metadata(&balance.contract_address).await {
                Ok(metadata) => display_token(balance, metadata),
                Err(e) => {
                    warn!(
                        "Dropping {}: metadata fetch failed: {}",
                        balance.contract_address, e
                    );
                    None
                }
            }
        })
        .buffered(limit)
        .filter_map(|token| async move { token })
        .collect()
        .await
}

fn display_token(balance: &RawTokenBalance, metadata: TokenMetadata) -> Option<DisplayToken> {
    let decimals = metadata.decimals.unwrap_or(DEFAULT_DECIMALS);

    let human = match format_balance(&balance.token_balance, decimals) {
        Some(human) => human,
        None => {
            warn!(
                "Dropping {}: unparsable balance {}",
                balance.contract_address, balance.token_balance
            );
            return None;
        }
    };

    Some(DisplayToken {
        name: metadata.name.unwrap_or_else(|| "Unknown Token".to_string()),
        symbol: metadata.symbol.unwrap_or_else(|| "???".to_string()),
        logo: metadata.logo,
        balance: human,
        contract_address: balance.contract_address.clone(),
        decimals,
    })
}

/// Human-readable balance: integer balance / 10^decimals, formatted to
/// exactly 4 fraction digits.
pub(crate) fn format_balance(raw: &str, decimals: u8) -> Option<String> {
    let value = parse_integer(raw)?;
    // f64 is the presentation precision; four fraction digits survive it
    let scaled = u256_to_f64(value) / 10f64.powi(decimals as i32);
    Some(format!("{:.4}", scaled))
}

fn parse_integer(raw: &str) -> Option<U256> {
    if let Some(hex) = raw.strip_prefix("0x") {
        U256::from_str_radix(hex, 16).ok()
    } else {
        U256::from_dec_str(raw).ok()
    }
}

fn u256_to_f64(value: U256) -> f64 {
    value.to_string().parse::<f64>().unwrap_or(f64::MAX)
}
