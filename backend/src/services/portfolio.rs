//! Portfolio service: owned certificates, bids and redemption

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use shared::fixtures::Dashboard;
use shared::flows::{RedemptionFlow, RedemptionForm, RedemptionReceipt};
use shared::{Bid, CertificateStore, PortfolioSummary};
use uuid::Uuid;

use super::catalog::CertificateSummary;
use super::ledger::{LedgerOperation, SimulatedLedger};
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub summary: PortfolioSummary,
    pub owned: Vec<CertificateSummary>,
    pub bids: Vec<Bid>,
}

pub struct PortfolioService {
    store: Arc<CertificateStore>,
    dashboard: Arc<Dashboard>,
    ledger: Arc<SimulatedLedger>,
}

impl PortfolioService {
    pub fn new(
        store: Arc<CertificateStore>,
        dashboard: Arc<Dashboard>,
        ledger: Arc<SimulatedLedger>,
    ) -> Self {
        Self {
            store,
            dashboard,
            ledger,
        }
    }

    pub fn overview(&self, balance: Decimal) -> PortfolioOverview {
        let owned = self.dashboard.owned(&self.store);

        PortfolioOverview {
            summary: PortfolioSummary::build(&owned, &self.dashboard.bids, balance),
            owned: owned.into_iter().map(CertificateSummary::from).collect(),
            bids: self.dashboard.bids.clone(),
        }
    }

    /// Retire an owned certificate and return its receipt
    pub async fn redeem(&self, id: &str, form: RedemptionForm) -> AppResult<RedemptionReceipt> {
        let cert = self
            .dashboard
            .owned(&self.store)
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Owned certificate {}", id)))?;

        let mut flow = RedemptionFlow::open(cert.id.clone());
        flow.submit(form)?;

        let confirmation = self
            .ledger
            .submit(
                LedgerOperation::Redeem,
                &format!("{}:{}", cert.id, flow.form.company.trim()),
            )
            .await?;

        let receipt = RedemptionReceipt {
            receipt_id: Uuid::new_v4().to_string(),
            certificate_id: cert.id.clone(),
            certificate_name: cert.display_name(),
            company: flow.form.company.trim().to_string(),
            purpose: flow.form.purpose.trim().to_string(),
            scope2_note: flow.form.scope2_note.trim().to_string(),
            redeemed_at: confirmation.confirmed_at,
            signature: confirmation.signature,
        };
        flow.complete(receipt.clone())?;

        tracing::info!(certificate = %cert.id, receipt = %receipt.receipt_id, "Certificate redeemed");
        Ok(receipt)
    }
}
