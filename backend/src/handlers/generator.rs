//! Generator dashboard handlers

use axum::{extract::State, Json};
use shared::{GenerationPoint, GeneratorStats};

use crate::error::AppResult;
use crate::services::generator::{MintInput, MintReceipt};
use crate::services::GeneratorService;
use crate::AppState;

fn generator(state: &AppState) -> GeneratorService {
    GeneratorService::new(state.dashboard.generator.clone(), state.ledger.clone())
}

pub async fn get_generator_stats(State(state): State<AppState>) -> Json<GeneratorStats> {
    Json(generator(&state).stats().clone())
}

/// Generation chart for the current day
pub async fn get_generation(State(state): State<AppState>) -> Json<Vec<GenerationPoint>> {
    Json(generator(&state).generation())
}

pub async fn mint_certificate(
    State(state): State<AppState>,
    Json(input): Json<MintInput>,
) -> AppResult<Json<MintReceipt>> {
    let receipt = generator(&state).mint(input).await?;
    Ok(Json(receipt))
}
