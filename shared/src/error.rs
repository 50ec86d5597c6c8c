//! Errors raised while loading catalog data or parsing user-facing names

use thiserror::Error;

/// Errors for model conversion and fixture loading
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Certificate {id} is on auction but has no {field}")]
    IncompleteAuction { id: String, field: &'static str },

    #[error("Duplicate certificate id: {0}")]
    DuplicateId(String),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown certificate status: {0}")]
    UnknownStatus(String),

    #[error("Unknown renewable type: {0}")]
    UnknownRenewableType(String),

    #[error("Unknown activity filter: {0}")]
    UnknownActivityFilter(String),

    #[error("Invalid fixture data: {0}")]
    InvalidFixture(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::InvalidFixture(err.to_string())
    }
}
