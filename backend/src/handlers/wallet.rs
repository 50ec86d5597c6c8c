//! Wallet handlers

use axum::{extract::State, Json};
use shared::WalletProvider;

use crate::error::AppResult;
use crate::services::wallet::{ConnectRequest, ConnectedWallet};
use crate::services::WalletService;
use crate::AppState;

pub async fn list_wallets() -> Json<&'static [WalletProvider]> {
    Json(WalletService::supported())
}

pub async fn connect_wallet(
    State(state): State<AppState>,
    Json(request): Json<ConnectRequest>,
) -> AppResult<Json<ConnectedWallet>> {
    let service = WalletService::new(state.ledger.clone(), state.config.wallet.balance_usdc);
    Ok(Json(service.connect(request).await?))
}
