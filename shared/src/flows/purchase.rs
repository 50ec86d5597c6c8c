//! Buy-now dialog

use rust_decimal::Decimal;
use serde::Serialize;

use super::{invalid, FlowError};
use crate::fees::FeeBreakdown;
use crate::models::{Certificate, Listing, Quote};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStep {
    Confirm,
    Approving,
    Success,
}

impl PurchaseStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseStep::Confirm => "confirm",
            PurchaseStep::Approving => "approving",
            PurchaseStep::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseFlow {
    pub certificate_id: String,
    pub fees: FeeBreakdown,
    pub balance: Decimal,
    step: PurchaseStep,
}

impl PurchaseFlow {
    /// Only "Buy Now" listings with a fixed price can be purchased
    pub fn open(cert: &Certificate, balance: Decimal) -> Result<Self, FlowError> {
        let price = match cert.listing {
            Listing::BuyNow(Quote {
                price: Some(price), ..
            }) => price,
            _ => return Err(FlowError::NotForSale(cert.id.clone())),
        };

        Ok(Self {
            certificate_id: cert.id.clone(),
            fees: FeeBreakdown::for_amount(price).ok_or(FlowError::InvalidAmount)?,
            balance,
            step: PurchaseStep::Confirm,
        })
    }

    pub fn step(&self) -> PurchaseStep {
        self.step
    }

    pub fn submit(&mut self) -> Result<FeeBreakdown, FlowError> {
        if self.step != PurchaseStep::Confirm {
            return Err(invalid("submit a purchase", self.step.as_str()));
        }
        if !self.fees.affordable_with(self.balance) {
            return Err(FlowError::InsufficientBalance);
        }
        self.step = PurchaseStep::Approving;
        Ok(self.fees)
    }

    pub fn confirm(&mut self) -> Result<(), FlowError> {
        if self.step != PurchaseStep::Approving {
            return Err(invalid("confirm a purchase", self.step.as_str()));
        }
        self.step = PurchaseStep::Success;
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), FlowError> {
        if self.step == PurchaseStep::Approving {
            return Err(invalid("close", self.step.as_str()));
        }
        self.step = PurchaseStep::Confirm;
        Ok(())
    }
}
