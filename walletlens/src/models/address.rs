//! Wallet address types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Canonical 20-byte wallet address as a lowercase `0x`-prefixed hex string.
///
/// Every downstream fetch takes a `ResolvedAddress`; a value that fails the
/// 40-hex-digit pattern is rejected at construction and never forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedAddress(String);

impl ResolvedAddress {
    /// Validate a candidate address and normalize it to lowercase.
    pub fn new(candidate: &str) -> Result<Self> {
        let hex = candidate
            .strip_prefix("0x")
            .ok_or_else(|| Error::InvalidAddress(format!("missing 0x prefix: {}", candidate)))?;

        if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidAddress(format!(
                "not a 40-hex-digit address: {}",
                candidate
            )));
        }

        Ok(Self(format!("0x{}", hex.to_lowercase())))
    }

    /// Address as a `0x`-prefixed hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ResolvedAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
