//! Trading fee calculation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Platform fee in percent of the bid or purchase amount
pub const PLATFORM_FEE_PERCENT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Estimated network fee in SOL, paid separately from the USDC total
pub const NETWORK_FEE_SOL: Decimal = Decimal::from_parts(5, 0, 0, false, 6);

/// Demo wallet balance in USDC
pub const DEMO_BALANCE_USDC: Decimal = Decimal::from_parts(125050, 0, 0, false, 2);

/// Cost breakdown shown before a bid or purchase is confirmed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub amount: Decimal,
    pub platform_fee: Decimal,
    pub network_fee_sol: Decimal,
    /// Amount plus platform fee, in USDC
    pub total: Decimal,
}

impl FeeBreakdown {
    /// `None` when the total does not fit in a `Decimal`
    pub fn for_amount(amount: Decimal) -> Option<Self> {
        let platform_fee = amount
            .checked_mul(PLATFORM_FEE_PERCENT)?
            .checked_div(Decimal::ONE_HUNDRED)?;
        Some(Self {
            amount,
            platform_fee,
            network_fee_sol: NETWORK_FEE_SOL,
            total: amount.checked_add(platform_fee)?,
        })
    }

    pub fn affordable_with(&self, balance: Decimal) -> bool {
        self.total <= balance
    }
}
