//! Query-level types shared with the presentation layer

use super::{DisplayNft, DisplayToken, Notification, ResolvedAddress};
use crate::error::Error;

/// Pipeline stage, as surfaced to the presentation layer.
///
/// A query progresses Idle → Resolving → Fetching → Enriching → Ready; any
/// fatal error makes Failed terminal until a new query restarts at Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStage {
    Idle,
    Resolving,
    Fetching,
    Enriching,
    Ready,
    Failed,
}

/// Result of a completed query.
///
/// Carries the generation it was started under so the caller can discard
/// outcomes superseded by a newer query.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub address: ResolvedAddress,
    pub tokens: Vec<DisplayToken>,
    pub nfts: Vec<DisplayNft>,
    pub notifications: Vec<Notification>,
    pub generation: u64,
}

/// Fatal query failure.
///
/// Advisory notifications are emitted on failure paths too (a failed ENS
/// lookup produces an error toast in the UI), so the failure carries
/// whatever was accumulated before the abort alongside the typed error.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct QueryFailure {
    #[source]
    pub error: Error,
    pub notifications: Vec<Notification>,
    pub generation: u64,
}
