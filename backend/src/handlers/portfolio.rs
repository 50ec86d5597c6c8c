//! Portfolio and activity feed handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use shared::flows::{RedemptionForm, RedemptionReceipt};
use shared::Activity;

use crate::error::AppResult;
use crate::services::activity::ActivityQuery;
use crate::services::portfolio::PortfolioOverview;
use crate::services::{ActivityService, PortfolioService};
use crate::AppState;

fn portfolio(state: &AppState) -> PortfolioService {
    PortfolioService::new(
        state.store.clone(),
        state.dashboard.clone(),
        state.ledger.clone(),
    )
}

pub async fn get_portfolio(State(state): State<AppState>) -> Json<PortfolioOverview> {
    Json(portfolio(&state).overview(state.config.wallet.balance_usdc))
}

/// Retire an owned certificate
pub async fn redeem_certificate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<RedemptionForm>,
) -> AppResult<Json<RedemptionReceipt>> {
    let receipt = portfolio(&state).redeem(&id, form).await?;
    Ok(Json(receipt))
}

pub async fn get_activity_feed(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> AppResult<Json<Vec<Activity>>> {
    let service = ActivityService::new(state.dashboard.clone());
    Ok(Json(service.feed(&query)?))
}
