//! GO Marketplace - Mock API Server
//!
//! Serves the renewable-energy Guarantee-of-Origin certificate catalog and
//! simulates wallet and ledger interactions for the marketplace front end.

use axum::{routing::get, Router};
use shared::fixtures::{Dashboard, Fixtures, CERTIFICATES_JSON, DASHBOARD_JSON};
use shared::CertificateStore;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;
use services::SimulatedLedger;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CertificateStore>,
    pub dashboard: Arc<Dashboard>,
    pub ledger: Arc<SimulatedLedger>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(fixtures: Fixtures, config: Config) -> Self {
        Self {
            store: Arc::new(fixtures.store),
            dashboard: Arc::new(fixtures.dashboard),
            ledger: Arc::new(SimulatedLedger::new(config.simulation.clone())),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gom_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting GO Marketplace Server");
    tracing::info!("Environment: {}", config.environment);

    let fixtures = load_fixtures(&config)?;
    tracing::info!(
        certificates = fixtures.store.len(),
        owned = fixtures.dashboard.owned_ids.len(),
        "Catalog loaded"
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = AppState::new(fixtures, config);

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Bundled catalog unless `catalog.fixture_path` points to another one
fn load_fixtures(config: &Config) -> anyhow::Result<Fixtures> {
    let certificates = match &config.catalog.fixture_path {
        Some(path) => {
            tracing::info!("Loading catalog from {}", path);
            std::fs::read_to_string(path)?
        }
        None => CERTIFICATES_JSON.to_string(),
    };

    Ok(Fixtures::from_json(&certificates, DASHBOARD_JSON)?)
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "GO Marketplace API v1"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Config {
            simulation: SimulationConfig {
                connect_delay_ms: 0,
                approval_delay_ms: 0,
                mint_delay_ms: 0,
                redemption_delay_ms: 0,
                ..SimulationConfig::default()
            },
            ..Config::default()
        };
        create_app(AppState::new(Fixtures::load().unwrap(), config))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    fn ids(body: &Value) -> Vec<&str> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_health_reports_catalog_size() {
        let (status, body) = get("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["certificates"], 14);
    }

    #[tokio::test]
    async fn test_query_endpoint_filters_and_sorts() {
        let (status, body) =
            get("/api/v1/certificates?status=On%20Auction&sort=ending-soon").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec!["go-001", "go-011", "go-007", "go-003"]);
        assert_eq!(body["pagination"]["totalItems"], 4);
    }

    #[tokio::test]
    async fn test_query_endpoint_paginates() {
        let (_, body) = get("/api/v1/certificates?page=2&perPage=5").await;
        assert_eq!(body["data"].as_array().unwrap().len(), 5);
        assert_eq!(body["pagination"]["totalPages"], 3);
        assert_eq!(body["pagination"]["hasMore"], true);
    }

    #[tokio::test]
    async fn test_unknown_sort_key_is_bad_request() {
        let (status, body) = get("/api/v1/certificates?sort=cheapest").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "sort");
    }

    #[tokio::test]
    async fn test_certificate_detail_and_missing() {
        let (status, body) = get("/api/v1/certificates/go-003").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "On Auction");
        assert_eq!(body["generatorName"], "Cork Offshore Wind");

        let (status, body) = get("/api/v1/certificates/go-999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_facets() {
        let (status, body) = get("/api/v1/certificates/facets").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["regions"], json!(["Ireland"]));
        assert_eq!(body["generators"].as_array().unwrap().len(), 14);
    }

    #[tokio::test]
    async fn test_place_bid() {
        let (status, body) = post("/api/v1/certificates/go-001/bids", json!({"amount": 50})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bid"]["status"], "leading");
        assert_eq!(body["bid"]["goId"], "go-001");

        let (status, body) = post("/api/v1/certificates/go-001/bids", json!({"amount": 10})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Minimum bid is 46.00 USDC");
    }

    #[tokio::test]
    async fn test_purchase_sold_out_conflicts() {
        let (status, body) = post("/api/v1/certificates/go-005/purchase", json!({})).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "NOT_AVAILABLE");
    }

    #[tokio::test]
    async fn test_portfolio_and_redeem() {
        let (status, body) = get("/api/v1/portfolio").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["ownedCount"], 2);

        let (status, body) = post(
            "/api/v1/portfolio/go-013/redeem",
            json!({"company": "Acme", "purpose": "Scope 2 reporting"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["certificateId"], "go-013");
    }

    #[tokio::test]
    async fn test_activity_feed_filter() {
        let (status, body) = get("/api/v1/activity?filter=you").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_mint_with_nothing_accrued() {
        let (status, body) = post(
            "/api/v1/generator/mint",
            json!({"window": {"start": "2025-10-30T00:00:00Z", "end": "2025-10-30T23:59:59Z"}}),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "NOTHING_TO_MINT");
    }

    #[tokio::test]
    async fn test_wallet_connect() {
        let (status, body) = post("/api/v1/wallet/connect", json!({"wallet": "Solflare"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["connection"]["state"], "connected");
        assert_eq!(body["connection"]["wallet"], "Solflare");
    }

    #[tokio::test]
    async fn test_error_log_export_is_csv() {
        let response = app()
            .oneshot(
                Request::get("/api/v1/admin/errors/export")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8(bytes.to_vec())
            .unwrap()
            .starts_with("timestamp,component,level,message,count"));
    }
}
