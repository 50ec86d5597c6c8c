//! Portfolio models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Bid, Certificate};

/// Summary cards of the portfolio page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub owned_count: usize,
    /// MWh held
    pub owned_volume: Decimal,
    pub active_bids: usize,
    /// Amount committed in open bids
    pub bid_exposure: Decimal,
    pub usdc_balance: Decimal,
}

impl PortfolioSummary {
    pub fn build(owned: &[&Certificate], bids: &[Bid], usdc_balance: Decimal) -> Self {
        let open_bids: Vec<&Bid> = bids.iter().filter(|b| b.is_open()).collect();

        Self {
            owned_count: owned.len(),
            owned_volume: owned.iter().map(|c| c.volume).sum(),
            active_bids: open_bids.len(),
            bid_exposure: open_bids.iter().map(|b| b.amount).sum(),
            usdc_balance,
        }
    }
}
