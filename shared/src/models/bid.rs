//! Bid models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bid placed by the current user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: String,
    #[serde(rename = "goId")]
    pub certificate_id: String,
    #[serde(rename = "goName")]
    pub certificate_name: String,
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
    pub status: BidStatus,
    pub ends_at: DateTime<Utc>,
}

impl Bid {
    /// Bids whose auction has not been decided yet
    pub fn is_open(&self) -> bool {
        matches!(self.status, BidStatus::Leading | BidStatus::Outbid)
    }
}

/// Position of a bid in its auction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Leading,
    Outbid,
    Won,
    Lost,
}
