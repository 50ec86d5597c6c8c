//! Marketplace catalog and trading handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{Activity, CatalogFacets, PaginatedResponse, Pagination, Slice};

use crate::error::AppResult;
use crate::services::catalog::{CertificateDetail, CertificateListParams, CertificateSummary};
use crate::services::trading::{BidReceipt, PlaceBidRequest, PurchaseReceipt};
use crate::services::{CatalogService, TradingService};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

fn trading(state: &AppState) -> TradingService {
    TradingService::new(
        state.store.clone(),
        state.ledger.clone(),
        state.config.wallet.balance_usdc,
    )
}

/// Search, filter and sort the catalog
pub async fn list_certificates(
    State(state): State<AppState>,
    Query(params): Query<CertificateListParams>,
) -> AppResult<Json<PaginatedResponse<CertificateSummary>>> {
    let service = CatalogService::new(state.store.clone());
    Ok(Json(service.list(&params)?))
}

/// Values for the filter sidebar
pub async fn get_facets(State(state): State<AppState>) -> Json<CatalogFacets> {
    let service = CatalogService::new(state.store.clone());
    Json(service.facets())
}

pub async fn get_certificate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CertificateDetail>> {
    let service = CatalogService::new(state.store.clone());
    Ok(Json(service.get(&id)?))
}

pub async fn list_slices(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Slice>>> {
    let service = CatalogService::new(state.store.clone());
    let pagination = Pagination::new(query.page, query.per_page);
    Ok(Json(service.slices(&id, pagination)?))
}

pub async fn get_certificate_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Activity>>> {
    let service = CatalogService::new(state.store.clone());
    Ok(Json(service.activity(&id)?))
}

/// Place a bid on an auction
pub async fn place_bid(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PlaceBidRequest>,
) -> AppResult<Json<BidReceipt>> {
    let receipt = trading(&state).place_bid(&id, request).await?;
    Ok(Json(receipt))
}

/// Buy a fixed-price certificate
pub async fn purchase_certificate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PurchaseReceipt>> {
    let receipt = trading(&state).purchase(&id).await?;
    Ok(Json(receipt))
}
