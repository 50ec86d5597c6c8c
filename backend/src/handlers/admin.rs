//! Admin observability handlers

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};

use crate::error::AppResult;
use crate::services::admin::AdminOverview;
use crate::services::AdminService;
use crate::AppState;

pub async fn get_admin_overview(State(state): State<AppState>) -> Json<AdminOverview> {
    let service = AdminService::new(state.dashboard.clone());
    Json(service.overview())
}

/// Download the error log as CSV
pub async fn export_error_log(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let service = AdminService::new(state.dashboard.clone());
    let csv = service.export_errors_csv()?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"error_log.csv\""),
        ],
        csv,
    ))
}
