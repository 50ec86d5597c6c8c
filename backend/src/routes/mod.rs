//! Route definitions for the GO Marketplace API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/certificates", certificate_routes())
        .nest("/portfolio", portfolio_routes())
        .route("/activity", get(handlers::get_activity_feed))
        .nest("/generator", generator_routes())
        .route("/wallets", get(handlers::list_wallets))
        .route("/wallet/connect", post(handlers::connect_wallet))
        .nest("/admin", admin_routes())
}

/// Marketplace catalog and trading routes
fn certificate_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_certificates))
        .route("/facets", get(handlers::get_facets))
        .route("/:id", get(handlers::get_certificate))
        .route("/:id/slices", get(handlers::list_slices))
        .route("/:id/activity", get(handlers::get_certificate_activity))
        .route("/:id/bids", post(handlers::place_bid))
        .route("/:id/purchase", post(handlers::purchase_certificate))
}

fn portfolio_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_portfolio))
        .route("/:id/redeem", post(handlers::redeem_certificate))
}

fn generator_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::get_generator_stats))
        .route("/generation", get(handlers::get_generation))
        .route("/mint", post(handlers::mint_certificate))
}

/// Admin observability routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/overview", get(handlers::get_admin_overview))
        .route("/errors/export", get(handlers::export_error_log))
}
