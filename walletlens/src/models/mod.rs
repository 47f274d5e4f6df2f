//! Data model for the indexing pipeline
//!
//! Raw provider shapes, the display-ready records derived from them, and the
//! query-level types shared with the presentation layer. All entities are
//! created fresh per query; nothing here is persisted.

mod address;
mod nft;
mod notification;
mod query;
mod token;

pub use address::*;
pub use nft::*;
pub use notification::*;
pub use query::*;
pub use token::*;
