//! Browser tests for the WASM bindings

#![cfg(target_arch = "wasm32")]

use go_marketplace_wasm::{bid_fee_breakdown, format_currency, validate_bid, Marketplace};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn bundled_catalog_queries() {
    let marketplace = Marketplace::bundled().unwrap();
    assert_eq!(marketplace.size(), 14);

    let result = marketplace
        .query(r#"{"criteria": {"status": ["On Auction"]}, "sort": "ending-soon"}"#)
        .unwrap();
    assert!(result.starts_with("[{\"id\":\"go-001\""));
}

#[wasm_bindgen_test]
fn invalid_catalog_is_rejected() {
    assert!(Marketplace::new("{}").is_err());
}

#[wasm_bindgen_test]
fn helpers() {
    assert_eq!(format_currency(45.5).unwrap(), "45.50 USDC");
    assert!(bid_fee_breakdown(46.0).unwrap().contains("\"platformFee\""));
    assert_eq!(validate_bid(46.0, 46.0, 1250.5), None);
    assert!(validate_bid(10.0, 46.0, 1250.5).is_some());
}
