//! Place-bid dialog

use rust_decimal::Decimal;
use serde::Serialize;

use super::{invalid, FlowError};
use crate::fees::FeeBreakdown;
use crate::models::Certificate;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BidStep {
    Input,
    Approving,
    Success,
}

impl BidStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStep::Input => "input",
            BidStep::Approving => "approving",
            BidStep::Success => "success",
        }
    }
}

/// Bid entry, wallet approval and confirmation for one auction
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BidFlow {
    pub certificate_id: String,
    pub min_bid: Decimal,
    pub balance: Decimal,
    amount: Decimal,
    step: BidStep,
}

impl BidFlow {
    /// Open the dialog with the amount preset to the minimum bid
    pub fn open(cert: &Certificate, balance: Decimal) -> Result<Self, FlowError> {
        let min_bid = cert
            .listing
            .min_bid()
            .ok_or_else(|| FlowError::NotOnAuction(cert.id.clone()))?;

        Ok(Self {
            certificate_id: cert.id.clone(),
            min_bid,
            balance,
            amount: min_bid,
            step: BidStep::Input,
        })
    }

    pub fn step(&self) -> BidStep {
        self.step
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// `None` while the entered amount is too large to price
    pub fn fees(&self) -> Option<FeeBreakdown> {
        FeeBreakdown::for_amount(self.amount)
    }

    pub fn set_amount(&mut self, amount: Decimal) -> Result<(), FlowError> {
        if self.step != BidStep::Input {
            return Err(invalid("change the bid", self.step.as_str()));
        }
        self.amount = amount;
        Ok(())
    }

    /// Validate the amount and hand over to the wallet
    pub fn submit(&mut self) -> Result<FeeBreakdown, FlowError> {
        if self.step != BidStep::Input {
            return Err(invalid("submit a bid", self.step.as_str()));
        }
        if self.amount <= Decimal::ZERO {
            return Err(FlowError::InvalidAmount);
        }
        if self.amount < self.min_bid {
            return Err(FlowError::BelowMinimum {
                min_bid: self.min_bid,
            });
        }
        let fees = self.fees().ok_or(FlowError::InvalidAmount)?;
        if !fees.affordable_with(self.balance) {
            return Err(FlowError::InsufficientBalance);
        }

        self.step = BidStep::Approving;
        Ok(fees)
    }

    /// Wallet approved the transaction
    pub fn confirm(&mut self) -> Result<(), FlowError> {
        if self.step != BidStep::Approving {
            return Err(invalid("confirm a bid", self.step.as_str()));
        }
        self.step = BidStep::Success;
        Ok(())
    }

    /// Close and reset the dialog. Refused while the wallet is approving.
    pub fn close(&mut self) -> Result<(), FlowError> {
        if self.step == BidStep::Approving {
            return Err(invalid("close", self.step.as_str()));
        }
        self.step = BidStep::Input;
        self.amount = self.min_bid;
        Ok(())
    }
}
