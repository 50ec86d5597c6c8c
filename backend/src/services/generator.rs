//! Generator dashboard service: live stats, generation chart and minting

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::fixtures::GeneratorProfile;
use shared::flows::{ListingChoice, MintRequest, MintWizard};
use shared::{GenerationPoint, GeneratorStats, TimeWindow};
use uuid::Uuid;

use super::ledger::{LedgerConfirmation, LedgerOperation, SimulatedLedger};
use crate::error::AppResult;

/// Body of `POST /generator/mint`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintInput {
    pub window: TimeWindow,
    #[serde(default)]
    pub listing: ListingChoice,
    #[serde(default = "default_auto_list")]
    pub auto_list: bool,
}

fn default_auto_list() -> bool {
    true
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintReceipt {
    pub batch_id: String,
    pub request: MintRequest,
    pub remaining_units: u32,
    pub minted_at: DateTime<Utc>,
    pub confirmation: LedgerConfirmation,
}

pub struct GeneratorService {
    profile: GeneratorProfile,
    ledger: Arc<SimulatedLedger>,
}

impl GeneratorService {
    pub fn new(profile: GeneratorProfile, ledger: Arc<SimulatedLedger>) -> Self {
        Self { profile, ledger }
    }

    pub fn stats(&self) -> &GeneratorStats {
        &self.profile.stats
    }

    pub fn generation(&self) -> Vec<GenerationPoint> {
        self.profile.generation()
    }

    /// Walk the mint wizard from window selection to confirmation and mint
    /// one unit
    pub async fn mint(&self, input: MintInput) -> AppResult<MintReceipt> {
        let mut wizard = MintWizard::open(&self.profile.stats)?;
        wizard.select_window(input.window)?;
        wizard.next()?;
        wizard.next()?;
        wizard.set_listing(input.listing, input.auto_list)?;
        wizard.next()?;
        let request = wizard.mint()?;

        let confirmation = self
            .ledger
            .submit(
                LedgerOperation::Mint,
                &format!(
                    "{}:{}:{}",
                    request.generator_id,
                    request.window.start.to_rfc3339(),
                    request.units
                ),
            )
            .await?;
        wizard.complete()?;

        tracing::info!(
            generator = %request.generator_id,
            units = request.units,
            remaining = wizard.mintable_units,
            "Certificate minted"
        );

        Ok(MintReceipt {
            batch_id: Uuid::new_v4().to_string(),
            remaining_units: wizard.mintable_units,
            minted_at: confirmation.confirmed_at,
            request,
            confirmation,
        })
    }
}
