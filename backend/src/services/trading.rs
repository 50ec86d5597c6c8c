//! Trading service: simulated bids and buy-now purchases
//!
//! Both operations drive the shared dialog state machines through their
//! approval step. The catalog is never changed; callers receive a receipt.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::fees::FeeBreakdown;
use shared::flows::{BidFlow, PurchaseFlow};
use shared::{Bid, BidStatus, Certificate, CertificateStore};
use uuid::Uuid;

use super::ledger::{LedgerConfirmation, LedgerOperation, SimulatedLedger};
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct PlaceBidRequest {
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidReceipt {
    pub bid: Bid,
    pub fees: FeeBreakdown,
    pub confirmation: LedgerConfirmation,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReceipt {
    pub purchase_id: String,
    pub certificate_id: String,
    pub certificate_name: String,
    pub fees: FeeBreakdown,
    pub confirmation: LedgerConfirmation,
}

pub struct TradingService {
    store: Arc<CertificateStore>,
    ledger: Arc<SimulatedLedger>,
    balance: Decimal,
}

impl TradingService {
    pub fn new(store: Arc<CertificateStore>, ledger: Arc<SimulatedLedger>, balance: Decimal) -> Self {
        Self {
            store,
            ledger,
            balance,
        }
    }

    fn find(&self, id: &str) -> AppResult<&Certificate> {
        self.store
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Certificate {}", id)))
    }

    /// Place a bid on an auction and wait for the wallet approval
    pub async fn place_bid(&self, id: &str, request: PlaceBidRequest) -> AppResult<BidReceipt> {
        let cert = self.find(id)?;
        let ends_at = cert
            .auction_ends()
            .ok_or_else(|| AppError::NotAvailable(format!("Certificate {} is not on auction", id)))?;

        let mut flow = BidFlow::open(cert, self.balance)?;
        flow.set_amount(request.amount)?;
        let fees = flow.submit()?;

        let confirmation = self
            .ledger
            .submit(LedgerOperation::Bid, &format!("{}:{}", cert.id, fees.amount))
            .await?;
        flow.confirm()?;

        tracing::info!(certificate = %cert.id, amount = %fees.amount, "Bid placed");

        Ok(BidReceipt {
            bid: Bid {
                id: format!("bid-{}", Uuid::new_v4()),
                certificate_id: cert.id.clone(),
                certificate_name: cert.display_name(),
                amount: fees.amount,
                timestamp: confirmation.confirmed_at,
                status: BidStatus::Leading,
                ends_at,
            },
            fees,
            confirmation,
        })
    }

    /// Buy a fixed-price certificate
    pub async fn purchase(&self, id: &str) -> AppResult<PurchaseReceipt> {
        let cert = self.find(id)?;
        let mut flow = PurchaseFlow::open(cert, self.balance)?;
        let fees = flow.submit()?;

        let confirmation = self
            .ledger
            .submit(LedgerOperation::Purchase, &format!("{}:{}", cert.id, fees.amount))
            .await?;
        flow.confirm()?;

        tracing::info!(certificate = %cert.id, total = %fees.total, "Certificate purchased");

        Ok(PurchaseReceipt {
            purchase_id: Uuid::new_v4().to_string(),
            certificate_id: cert.id.clone(),
            certificate_name: cert.display_name(),
            fees,
            confirmation,
        })
    }
}
