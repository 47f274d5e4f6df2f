//! NFT ownership and display types

use serde::{Deserialize, Serialize};

/// Media reference attached to a raw NFT record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NftMedia {
    /// Gateway-hosted URL, preferred for display.
    pub gateway: Option<String>,
    /// Raw URL as stored on chain, often an `ipfs://` link.
    pub raw: Option<String>,
}

/// Contract the NFT belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftContract {
    pub address: String,
    pub name: Option<String>,
}

/// Token identifier within its contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftId {
    pub token_id: String,
    pub token_metadata: Option<NftTokenMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftTokenMetadata {
    /// Token standard, e.g. `ERC721` or `ERC1155`.
    pub token_type: Option<String>,
}

/// Collection-level metadata the provider attaches to each owned item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftContractMetadata {
    pub name: Option<String>,
    pub open_sea: Option<OpenSeaMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSeaMetadata {
    pub floor_price: Option<f64>,
}

/// Provider-supplied ownership record. Transient, discarded after
/// normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNftRecord {
    pub title: Option<String>,
    pub contract: NftContract,
    pub id: NftId,
    #[serde(default)]
    pub media: Vec<NftMedia>,
    pub contract_metadata: Option<NftContractMetadata>,
}

/// Display-ready NFT entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNft {
    pub title: String,
    pub contract_address: String,
    pub token_id: String,
    pub token_type: String,
    /// Absent when the record carries no usable media URL; the presentation
    /// layer substitutes a placeholder.
    pub image: Option<String>,
    pub collection_name: String,
    pub floor_price: Option<f64>,
}
