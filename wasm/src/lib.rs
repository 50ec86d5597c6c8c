//! WebAssembly module for the GO Marketplace
//!
//! Provides client-side computation for:
//! - Catalog search, filtering and sorting
//! - Bid fee breakdowns and bid validation
//! - Display formatting (currency, countdowns, signatures)

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

use shared::fees::FeeBreakdown;
use shared::fixtures::CERTIFICATES_JSON;
use shared::{validate_bid_amount, CatalogQuery, CertificateStore};

fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

fn js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

fn to_decimal(value: f64, name: &str) -> Result<Decimal, String> {
    Decimal::try_from(value).map_err(|_| format!("Invalid {}: {}", name, value))
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn parse_time(iso: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(iso)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("Invalid timestamp {}: {}", iso, e))
}

/// Run a JSON encoded [`CatalogQuery`] and return the matching certificates
/// as a JSON array. An empty string runs the default query.
fn run_query(store: &CertificateStore, query_json: &str) -> Result<String, String> {
    let query: CatalogQuery = if query_json.trim().is_empty() {
        CatalogQuery::default()
    } else {
        serde_json::from_str(query_json).map_err(|e| format!("Invalid query JSON: {}", e))?
    };

    serde_json::to_string(&store.query(&query)).map_err(|e| e.to_string())
}

fn remaining_at(end_iso: &str, now_ms: i64) -> Result<String, String> {
    let end = parse_time(end_iso)?;
    let now = Utc
        .timestamp_millis_opt(now_ms)
        .single()
        .ok_or_else(|| format!("Invalid clock value: {}", now_ms))?;
    Ok(shared::format::time_remaining(end, now))
}

fn fee_breakdown_json(amount: f64) -> Result<String, String> {
    let fees = FeeBreakdown::for_amount(to_decimal(amount, "amount")?)
        .ok_or_else(|| format!("Invalid amount: {}", amount))?;
    serde_json::to_string(&fees).map_err(|e| e.to_string())
}

fn check_bid(amount: f64, min_bid: f64, balance: f64) -> Result<(), String> {
    validate_bid_amount(
        to_decimal(amount, "amount")?,
        to_decimal(min_bid, "minimum bid")?,
        to_decimal(balance, "balance")?,
    )
    .map_err(String::from)
}

/// Read-only catalog loaded once and queried on every input change
#[wasm_bindgen]
pub struct Marketplace {
    store: CertificateStore,
}

#[wasm_bindgen]
impl Marketplace {
    /// Load a catalog from a JSON array of certificate records
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: &str) -> Result<Marketplace, JsValue> {
        let store = CertificateStore::from_json(catalog_json).map_err(|e| js_error(e.to_string()))?;
        log(&format!("GO Marketplace catalog loaded: {} certificates", store.len()));
        Ok(Marketplace { store })
    }

    /// The demo catalog compiled into the module
    pub fn bundled() -> Result<Marketplace, JsValue> {
        Marketplace::new(CERTIFICATES_JSON)
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.store.len()
    }

    /// Filter and sort the catalog; `query_json` is `{criteria, text, sort}`
    pub fn query(&self, query_json: &str) -> Result<String, JsValue> {
        run_query(&self.store, query_json).map_err(js_error)
    }

    /// Sidebar filter options as JSON
    pub fn facets(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.store.facets()).map_err(|e| js_error(e.to_string()))
    }
}

/// Price used for filtering and sorting, from a certificate record JSON
#[wasm_bindgen]
pub fn effective_price(certificate_json: &str) -> Result<f64, JsValue> {
    let cert: shared::Certificate = serde_json::from_str(certificate_json)
        .map_err(|e| js_error(format!("Invalid certificate JSON: {}", e)))?;
    Ok(to_f64(cert.effective_price()))
}

/// "45.50 USDC" style amount
#[wasm_bindgen]
pub fn format_currency(amount: f64) -> Result<String, JsValue> {
    let amount = to_decimal(amount, "amount").map_err(js_error)?;
    Ok(shared::format::format_currency(amount))
}

/// Countdown to an auction end given as RFC 3339, against the browser clock
#[wasm_bindgen]
pub fn time_remaining(end_iso: &str) -> Result<String, JsValue> {
    remaining_at(end_iso, js_sys::Date::now() as i64).map_err(js_error)
}

/// Fee breakdown for a bid or purchase amount, as JSON
#[wasm_bindgen]
pub fn bid_fee_breakdown(amount: f64) -> Result<String, JsValue> {
    fee_breakdown_json(amount).map_err(js_error)
}

#[wasm_bindgen]
pub fn shorten_signature(signature: &str, start: usize, end: usize) -> String {
    shared::format::shorten_signature(signature, start, end)
}

/// Error message for an invalid bid, or `None` when the bid can be placed
#[wasm_bindgen]
pub fn validate_bid(amount: f64, min_bid: f64, balance: f64) -> Option<String> {
    check_bid(amount, min_bid, balance).err()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled_store() -> CertificateStore {
        CertificateStore::from_json(CERTIFICATES_JSON).unwrap()
    }

    fn ids(json: &str) -> Vec<String> {
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_default_query_returns_whole_catalog() {
        let result = run_query(&bundled_store(), "").unwrap();
        let ids = ids(&result);
        assert_eq!(ids.len(), 14);
        assert_eq!(ids[0], "go-004");
    }

    #[test]
    fn test_query_with_criteria() {
        let query = r#"{
            "criteria": {"renewableTypes": ["solar"], "priceRange": ["0", "37"]},
            "sort": "price-asc"
        }"#;
        let result = run_query(&bundled_store(), query).unwrap();
        assert_eq!(ids(&result), vec!["go-011", "go-005", "go-008"]);
    }

    #[test]
    fn test_malformed_query() {
        let err = run_query(&bundled_store(), "{\"sort\": \"cheapest\"}").unwrap_err();
        assert!(err.starts_with("Invalid query JSON"));
    }

    #[test]
    fn test_remaining_time() {
        let now = Utc.with_ymd_and_hms(2025, 10, 30, 14, 0, 0).unwrap();
        let ms = now.timestamp_millis();
        assert_eq!(remaining_at("2025-10-31T16:30:00Z", ms).unwrap(), "1d 2h");
        assert_eq!(remaining_at("2025-10-30T13:00:00Z", ms).unwrap(), "Ended");
        assert!(remaining_at("tomorrow", ms).is_err());
    }

    #[test]
    fn test_fee_breakdown() {
        let json = fee_breakdown_json(46.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let total: Decimal = value["total"].as_str().unwrap().parse().unwrap();
        assert_eq!(total, Decimal::new(4623, 2));

        assert!(fee_breakdown_json(7.9e28).is_err());
    }

    #[test]
    fn test_bid_validation() {
        assert!(check_bid(46.0, 46.0, 1250.5).is_ok());
        assert!(check_bid(45.0, 46.0, 1250.5).is_err());
        assert!(check_bid(46.0, 46.0, 46.1).is_err());
        assert!(check_bid(7.9e28, 46.0, 7.9e28).is_err());
    }

    #[test]
    fn test_shorten_signature() {
        assert_eq!(shorten_signature("5J7kXq9w3Nm9", 4, 4), "5J7k...3Nm9");
        assert_eq!(shorten_signature("short", 4, 4), "short");
    }
}
