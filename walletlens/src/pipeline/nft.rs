//! NFT normalization

use crate::models::{DisplayNft, RawNftRecord};

const DEFAULT_TITLE: &str = "Untitled";
const DEFAULT_COLLECTION: &str = "Unknown Collection";
const DEFAULT_TOKEN_TYPE: &str = "UNKNOWN";

/// Map a raw ownership record to its display shape.
///
/// Pure and synchronous; no network calls. Gateway-hosted media is
/// preferred, the raw URL is the fallback, and with neither the entry
/// carries no image.
pub(crate) fn normalize_nft(record: RawNftRecord) -> DisplayNft {
    let image = record
        .media
        .iter()
        .find_map(|m| non_empty(m.gateway.as_deref()))
        .or_else(|| record.media.iter().find_map(|m| non_empty(m.raw.as_deref())));

    let collection_name = record
        .contract_metadata
        .as_ref()
        .and_then(|m| m.name.clone())
        .or_else(|| record.contract.name.clone())
        .unwrap_or_else(|| DEFAULT_COLLECTION.to_string());

    let floor_price = record
        .contract_metadata
        .as_ref()
        .and_then(|m| m.open_sea.as_ref())
        .and_then(|o| o.floor_price);

    DisplayNft {
        title: record
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        contract_address: record.contract.address,
        token_id: record.id.token_id,
        token_type: record
            .id
            .token_metadata
            .and_then(|m| m.token_type)
            .unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_string()),
        image,
        collection_name,
        floor_price,
    }
}

fn non_empty(url: Option<&str>) -> Option<String> {
    url.filter(|u| !u.is_empty()).map(str::to_string)
}
