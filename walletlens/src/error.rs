//! Error types for the walletlens library

use thiserror::Error;

use crate::models::QueryStage;

/// Custom error type for walletlens operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid address format: {0}")]
    InvalidAddress(String),

    #[error("Name resolution error: {0}")]
    Resolution(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Metadata error for {contract}: {message}")]
    Metadata { contract: String, message: String },
}

impl Error {
    /// Pipeline stage at which this error aborts a query.
    ///
    /// `Metadata` errors are isolated per item by the enricher and never
    /// abort a query; the mapping is provided for completeness.
    pub fn stage(&self) -> QueryStage {
        match self {
            Error::InvalidAddress(_) | Error::Resolution(_) => QueryStage::Resolving,
            Error::Provider(_) => QueryStage::Fetching,
            Error::Metadata { .. } => QueryStage::Enriching,
        }
    }
}

/// Result type for walletlens operations
pub type Result<T> = std::result::Result<T, Error>;
