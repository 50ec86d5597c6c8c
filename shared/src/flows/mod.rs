//! State machines behind the marketplace dialogs
//!
//! Each flow owns its current step and only moves through the transition
//! methods. A method called in the wrong step returns
//! [`FlowError::InvalidTransition`] and leaves the flow unchanged.

pub mod bid;
pub mod mint;
pub mod purchase;
pub mod redemption;
pub mod wallet;

pub use bid::*;
pub use mint::*;
pub use purchase::*;
pub use redemption::*;
pub use wallet::*;

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by dialog state machines
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Cannot {action} while {step}")]
    InvalidTransition {
        action: &'static str,
        step: &'static str,
    },

    #[error("Certificate {0} is not on auction")]
    NotOnAuction(String),

    #[error("Certificate {0} is not available for purchase")]
    NotForSale(String),

    #[error("Enter a valid amount")]
    InvalidAmount,

    #[error("Minimum bid is {min_bid:.2} USDC")]
    BelowMinimum { min_bid: Decimal },

    #[error("Insufficient USDC balance")]
    InsufficientBalance,

    #[error("{message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("No mintable units available")]
    NothingToMint,

    #[error("Unsupported wallet: {0}")]
    UnknownWallet(String),
}

impl FlowError {
    /// Map `validator` errors to the first failing field, in field name order
    pub fn from_validation(errors: &validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| *field);

        match fields.first() {
            Some((field, errs)) => FlowError::InvalidField {
                field: *field,
                message: errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid")),
            },
            None => FlowError::InvalidField {
                field: "form",
                message: "Form is invalid".to_string(),
            },
        }
    }
}

pub(crate) fn invalid(action: &'static str, step: &'static str) -> FlowError {
    FlowError::InvalidTransition { action, step }
}
