//! End-to-end pipeline tests against a scripted provider

mod common;

use std::sync::Arc;

use common::{metadata, MockProvider};
use walletlens::error::Error;
use walletlens::models::{NftContract, NftId, NftMedia, NotificationLevel, QueryStage, RawNftRecord};
use walletlens::{Pipeline, PipelineConfig};

const VITALIK: &str = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";
const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";
const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";

fn pipeline(provider: MockProvider) -> Pipeline {
    Pipeline::new(Arc::new(provider))
}

#[tokio::test]
async fn resolves_ens_name_and_enriches_one_token() {
    let provider = MockProvider::default()
        .with_name("vitalik.eth", VITALIK)
        .with_balance(DAI, "1234500000000000000")
        .with_metadata(DAI, metadata("Dai Stablecoin", "DAI", Some(18)));

    let outcome = pipeline(provider).run("vitalik.eth").await.unwrap();

    assert_eq!(outcome.address.as_str(), VITALIK);
    assert_eq!(outcome.tokens.len(), 1);
    assert_eq!(outcome.tokens[0].symbol, "DAI");
    assert_eq!(outcome.tokens[0].balance, "1.2345");

    // resolution and completion both produce advisory notifications
    assert!(outcome
        .notifications
        .iter()
        .any(|n| n.level == NotificationLevel::Info && n.title == "ENS resolved"));
    assert!(outcome
        .notifications
        .iter()
        .any(|n| n.title == "Query complete" && n.message.contains("1 tokens")));
}

#[tokio::test]
async fn unregistered_ens_name_fails_resolution() {
    let provider = MockProvider::default();

    let err = pipeline(provider).run("nobody.eth").await.unwrap_err();

    assert!(matches!(err.error, Error::Resolution(_)));
    assert_eq!(err.error.stage(), QueryStage::Resolving);
}

#[tokio::test]
async fn ens_failure_notification_travels_with_the_error() {
    let provider = MockProvider::default();

    let err = pipeline(provider).run("nobody.eth").await.unwrap_err();

    // the error toast must reach the presentation layer even though the
    // query produced no outcome
    assert!(err
        .notifications
        .iter()
        .any(|n| n.level == NotificationLevel::Error && n.title == "ENS resolution failed"));
}

#[tokio::test]
async fn name_service_outage_fails_resolution() {
    let provider = MockProvider {
        fail_name_lookup: true,
        ..Default::default()
    };

    let err = pipeline(provider).run("vitalik.eth").await.unwrap_err();
    assert!(matches!(err.error, Error::Resolution(_)));
}

#[tokio::test]
async fn invalid_literal_identifier_is_rejected_before_any_fetch() {
    let provider = MockProvider::default().with_balance(DAI, "1000");

    let err = pipeline(provider).run("not-an-address").await.unwrap_err();

    assert!(matches!(err.error, Error::InvalidAddress(_)));
    assert_eq!(err.error.stage(), QueryStage::Resolving);
}

#[tokio::test]
async fn literal_address_passes_through() {
    let provider = MockProvider::default();

    let outcome = pipeline(provider).run(VITALIK).await.unwrap();

    assert_eq!(outcome.address.as_str(), VITALIK);
    assert!(outcome.tokens.is_empty());
    assert!(outcome.nfts.is_empty());
}

#[tokio::test]
async fn failed_balance_request_fails_the_query() {
    let provider = MockProvider {
        fail_balances: true,
        ..Default::default()
    };

    let err = pipeline(provider).run(VITALIK).await.unwrap_err();

    assert!(matches!(err.error, Error::Provider(_)));
    assert_eq!(err.error.stage(), QueryStage::Fetching);
}

#[tokio::test]
async fn failed_nft_request_fails_the_query() {
    let provider = MockProvider {
        fail_nfts: true,
        ..Default::default()
    };

    let err = pipeline(provider).run(VITALIK).await.unwrap_err();
    assert!(matches!(err.error, Error::Provider(_)));
}

#[tokio::test]
async fn zero_balances_never_reach_the_metadata_stage() {
    let provider = MockProvider::default()
        .with_balance(DAI, "0")
        .with_balance(USDC, "0x0")
        .with_balance(WETH, "5000000000000000000")
        .with_metadata(WETH, metadata("Wrapped Ether", "WETH", Some(18)));

    let pipeline = pipeline(provider);
    let outcome = pipeline.run(VITALIK).await.unwrap();

    assert_eq!(outcome.tokens.len(), 1);
    assert_eq!(outcome.tokens[0].symbol, "WETH");
    assert_eq!(outcome.tokens[0].balance, "5.0000");
}

#[tokio::test]
async fn metadata_failure_drops_only_its_own_entry_and_preserves_order() {
    // USDC has no scripted metadata, so its lookup fails
    let provider = MockProvider::default()
        .with_balance(DAI, "1000000000000000000")
        .with_balance(USDC, "2000000")
        .with_balance(WETH, "3000000000000000000")
        .with_metadata(DAI, metadata("Dai Stablecoin", "DAI", Some(18)))
        .with_metadata(WETH, metadata("Wrapped Ether", "WETH", Some(18)));

    let outcome = pipeline(provider).run(VITALIK).await.unwrap();

    let symbols: Vec<&str> = outcome.tokens.iter().map(|t| t.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["DAI", "WETH"]);

    assert!(outcome
        .notifications
        .iter()
        .any(|n| n.level == NotificationLevel::Warning && n.title == "Partial results"));
}

#[tokio::test]
async fn enrichment_is_idempotent_with_a_stable_provider() {
    let provider = Arc::new(
        MockProvider::default()
            .with_balance(DAI, "1000000000000000000")
            .with_balance(WETH, "2500000000000000000")
            .with_metadata(DAI, metadata("Dai Stablecoin", "DAI", Some(18)))
            .with_metadata(WETH, metadata("Wrapped Ether", "WETH", Some(18))),
    );

    let pipeline = Pipeline::new(provider.clone());
    let first = pipeline.run(VITALIK).await.unwrap();
    let second = pipeline.run(VITALIK).await.unwrap();

    assert_eq!(first.tokens, second.tokens);
    // nothing is cached across queries; every run refetches metadata
    assert_eq!(
        provider
            .metadata_calls
            .load(std::sync::atomic::Ordering::SeqCst),
        4
    );
}

#[tokio::test]
async fn bounded_fan_out_still_preserves_input_order() {
    let mut provider = MockProvider::default();
    let contracts: Vec<String> = (0..40).map(|i| format!("0x{:040x}", i + 1)).collect();
    for (i, contract) in contracts.iter().enumerate() {
        provider = provider
            .with_balance(contract, "1000000000000000000")
            .with_metadata(contract, metadata(&format!("Token {}", i), &format!("T{}", i), Some(18)));
    }

    let pipeline = Pipeline::with_config(
        Arc::new(provider),
        PipelineConfig {
            metadata_concurrency: 4,
        },
    );
    let outcome = pipeline.run(VITALIK).await.unwrap();

    let got: Vec<&str> = outcome
        .tokens
        .iter()
        .map(|t| t.contract_address.as_str())
        .collect();
    let want: Vec<&str> = contracts.iter().map(String::as_str).collect();
    assert_eq!(got, want);
}

#[tokio::test]
async fn nfts_are_normalized_with_image_fallbacks() {
    let mut provider = MockProvider::default();
    provider.nfts = vec![
        RawNftRecord {
            title: Some("Lens #1".to_string()),
            contract: NftContract {
                address: "0x1111".to_string(),
                name: Some("Lenses".to_string()),
            },
            id: NftId {
                token_id: "1".to_string(),
                token_metadata: None,
            },
            media: vec![NftMedia {
                gateway: None,
                raw: Some("ipfs://lens-1.png".to_string()),
            }],
            contract_metadata: None,
        },
        RawNftRecord {
            contract: NftContract {
                address: "0x2222".to_string(),
                name: None,
            },
            id: NftId {
                token_id: "2".to_string(),
                token_metadata: None,
            },
            ..Default::default()
        },
    ];

    let outcome = pipeline(provider).run(VITALIK).await.unwrap();

    assert_eq!(outcome.nfts.len(), 2);
    assert_eq!(outcome.nfts[0].image.as_deref(), Some("ipfs://lens-1.png"));
    assert_eq!(outcome.nfts[0].collection_name, "Lenses");
    assert_eq!(outcome.nfts[1].image, None);
    assert_eq!(outcome.nfts[1].title, "Untitled");
    assert_eq!(outcome.nfts[1].collection_name, "Unknown Collection");
}

#[tokio::test]
async fn newer_query_makes_the_older_outcome_stale() {
    let provider = MockProvider::default();
    let pipeline = pipeline(provider);

    let first = pipeline.run(VITALIK).await.unwrap();
    assert!(!pipeline.is_stale(&first));

    let second = pipeline.run(VITALIK).await.unwrap();
    assert!(pipeline.is_stale(&first));
    assert!(!pipeline.is_stale(&second));
}
