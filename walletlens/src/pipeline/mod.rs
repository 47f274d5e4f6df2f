//! Query pipeline
//!
//! One entry point, [`Pipeline::run`]: resolve the identifier, fan out the
//! balance and NFT requests, enrich non-zero balances with metadata, and
//! normalize NFTs into display shape. Fatal errors abort the query; the
//! stage they abort at is reported by [`crate::Error::stage`].

mod enrich;
mod nft;
mod resolve;

pub use resolve::ENS_SUFFIX;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::{
    DisplayNft, DisplayToken, Notifications, QueryFailure, QueryOutcome, RawTokenBalance,
    ResolvedAddress,
};
use crate::provider::ChainDataProvider;

/// Tuning knobs for query runs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Upper bound on concurrent metadata lookups. Large wallets would
    /// otherwise fan out one request per held token.
    pub metadata_concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            metadata_concurrency: 16,
        }
    }
}

/// Monotonic query generation counter; newest query wins.
#[derive(Debug, Default)]
pub struct QuerySequencer {
    current: AtomicU64,
}

impl QuerySequencer {
    /// Start a new generation, superseding any query still in flight.
    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether the given generation is still the latest.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.load(Ordering::SeqCst) == generation
    }
}

/// Wallet query pipeline over a shared provider client.
pub struct Pipeline {
    provider: Arc<dyn ChainDataProvider>,
    config: PipelineConfig,
    sequencer: QuerySequencer,
}

impl Pipeline {
    /// Create a pipeline with default configuration.
    pub fn new(provider: Arc<dyn ChainDataProvider>) -> Self {
        Self::with_config(provider, PipelineConfig::default())
    }

    /// Create a pipeline with explicit configuration.
    pub fn with_config(provider: Arc<dyn ChainDataProvider>, config: PipelineConfig) -> Self {
        Self {
            provider,
            config,
            sequencer: QuerySequencer::default(),
        }
    }

    /// Whether an outcome has been superseded by a newer query on this
    /// pipeline.
    pub fn is_stale(&self, outcome: &QueryOutcome) -> bool {
        !self.sequencer.is_current(outcome.generation)
    }

    /// Run one query for a wallet identifier (hex address or ENS name).
    ///
    /// Notifications accumulated before a fatal error travel with the
    /// failure, so the presentation layer can show them either way.
    pub async fn run(
        &self,
        identifier: &str,
    ) -> std::result::Result<QueryOutcome, QueryFailure> {
        let generation = self.sequencer.begin();
        let mut notifications = Notifications::default();

        match self.execute(identifier, &mut notifications).await {
            Ok((address, tokens, nfts)) => Ok(QueryOutcome {
                address,
                tokens,
                nfts,
                notifications: notifications.into_vec(),
                generation,
            }),
            Err(error) => Err(QueryFailure {
                error,
                notifications: notifications.into_vec(),
                generation,
            }),
        }
    }

    async fn execute(
        &self,
        identifier: &str,
        notifications: &mut Notifications,
    ) -> Result<(ResolvedAddress, Vec<DisplayToken>, Vec<DisplayNft>)> {
        let address =
            resolve::resolve_identifier(self.provider.as_ref(), identifier, notifications)
                .await?;
        info!("Resolved {} to {}", identifier, address);

        // Balance and NFT ownership requests are independent; fan out and
        // wait for both. Either failing fails the query.
        let (balances, raw_nfts) = tokio::join!(
            self.provider.token_balances(&address),
            self.provider.nfts_for_owner(&address),
        );
        let balances = balances?;
        let raw_nfts = raw_nfts?;
        debug!(
            "Fetched {} balance entries and {} NFT records for {}",
            balances.len(),
            raw_nfts.len(),
            address
        );

        // Cheap pre-filter: zero balances never reach the metadata stage.
        let non_zero: Vec<RawTokenBalance> =
            balances.into_iter().filter(|b| !b.is_zero()).collect();

        let candidates = non_zero.len();
        let tokens = enrich::enrich_balances(
            self.provider.as_ref(),
            &non_zero,
            self.config.metadata_concurrency,
        )
        .await;

        if tokens.len() < candidates {
            notifications.warning(
                "Partial results",
                format!(
                    "{} token(s) dropped after failed metadata lookups",
                    candidates - tokens.len()
                ),
            );
        }

        let nfts = raw_nfts.into_iter().map(nft::normalize_nft).collect::<Vec<_>>();

        notifications.info(
            "Query complete",
            format!("Found {} tokens and {} NFTs", tokens.len(), nfts.len()),
        );

        Ok((address, tokens, nfts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequencer_supersedes_older_generations() {
        let sequencer = QuerySequencer::default();

        let first = sequencer.begin();
        assert!(sequencer.is_current(first));

        let second = sequencer.begin();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }
}
