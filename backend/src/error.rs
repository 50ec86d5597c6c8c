//! Error handling for the GO Marketplace server
//!
//! Every error is returned as `{"error": {"code", "message", "field"?}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::flows::FlowError;
use shared::ModelError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Marketplace errors
    #[error("Not available: {0}")]
    NotAvailable(String),

    #[error("Insufficient USDC balance")]
    InsufficientBalance,

    #[error("No mintable units available")]
    NothingToMint,

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    // Simulated ledger errors
    #[error("Ledger timed out: {0}")]
    LedgerTimeout(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<FlowError> for AppError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::InvalidTransition { .. } => AppError::InvalidStateTransition(err.to_string()),
            FlowError::NotOnAuction(_) | FlowError::NotForSale(_) => {
                AppError::NotAvailable(err.to_string())
            }
            FlowError::InvalidAmount | FlowError::BelowMinimum { .. } => {
                AppError::validation("amount", err.to_string())
            }
            FlowError::InsufficientBalance => AppError::InsufficientBalance,
            FlowError::InvalidField { field, message } => AppError::validation(field, message),
            FlowError::NothingToMint => AppError::NothingToMint,
            FlowError::UnknownWallet(_) => AppError::validation("wallet", err.to_string()),
        }
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownSortKey(_) => AppError::validation("sort", err.to_string()),
            ModelError::UnknownStatus(_) => AppError::validation("status", err.to_string()),
            ModelError::UnknownRenewableType(_) => AppError::validation("type", err.to_string()),
            ModelError::UnknownActivityFilter(_) => AppError::validation("filter", err.to_string()),
            _ => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::NotAvailable(msg) => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "NOT_AVAILABLE".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::InsufficientBalance => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "INSUFFICIENT_BALANCE".to_string(),
                    message: "Insufficient USDC balance".to_string(),
                    field: Some("amount".to_string()),
                },
            ),
            AppError::NothingToMint => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "NOTHING_TO_MINT".to_string(),
                    message: "No mintable units available".to_string(),
                    field: None,
                },
            ),
            AppError::InvalidStateTransition(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "INVALID_STATE_TRANSITION".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::LedgerTimeout(operation) => (
                StatusCode::GATEWAY_TIMEOUT,
                ErrorDetail {
                    code: "LEDGER_TIMEOUT".to_string(),
                    message: format!("Ledger did not confirm {} in time", operation),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_flow_errors_map_to_status_codes() {
        let cases = [
            (FlowError::InsufficientBalance, StatusCode::UNPROCESSABLE_ENTITY),
            (FlowError::NothingToMint, StatusCode::CONFLICT),
            (
                FlowError::BelowMinimum {
                    min_bid: Decimal::from(46),
                },
                StatusCode::BAD_REQUEST,
            ),
            (FlowError::NotForSale("go-001".into()), StatusCode::CONFLICT),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_unknown_sort_key_is_a_validation_error() {
        let err = AppError::from(ModelError::UnknownSortKey("cheapest".into()));
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "sort"));
    }
}
