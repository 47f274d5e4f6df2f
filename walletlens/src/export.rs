//! CSV export of display tokens
//!
//! Formatting-only concern on top of already-derived records.

use crate::models::DisplayToken;

/// CSV header row.
pub const CSV_HEADER: &str = "Name, Symbol, Balance, Contract Address";

/// Render tokens as CSV, one row per token.
///
/// Fields are comma-joined as-is; embedded commas are not escaped.
pub fn tokens_to_csv(tokens: &[DisplayToken]) -> String {
    let mut lines = Vec::with_capacity(tokens.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for token in tokens {
        lines.push(format!(
            "{}, {}, {}, {}",
            token.name, token.symbol, token.balance, token.contract_address
        ));
    }

    lines.join("\n")
}
