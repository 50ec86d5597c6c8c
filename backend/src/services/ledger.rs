//! Simulated wallet and ledger
//!
//! Every operation waits for its configured delay and then confirms with an
//! HMAC-SHA256 signature over the instruction payload. Nothing reaches a real
//! chain. A delay longer than `timeout_ms` surfaces as a ledger timeout.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::config::SimulationConfig;
use crate::error::{AppError, AppResult};

type HmacSha256 = Hmac<Sha256>;

/// Instruction kinds the simulated ledger confirms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOperation {
    Connect,
    Bid,
    Purchase,
    Mint,
    Redeem,
}

impl LedgerOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerOperation::Connect => "connect",
            LedgerOperation::Bid => "bid",
            LedgerOperation::Purchase => "purchase",
            LedgerOperation::Mint => "mint",
            LedgerOperation::Redeem => "redeem",
        }
    }
}

/// Confirmation of one simulated instruction
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerConfirmation {
    pub signature: String,
    pub short_signature: String,
    pub confirmed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SimulatedLedger {
    config: SimulationConfig,
}

impl SimulatedLedger {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    fn delay(&self, operation: LedgerOperation) -> Duration {
        let ms = match operation {
            LedgerOperation::Connect => self.config.connect_delay_ms,
            LedgerOperation::Bid | LedgerOperation::Purchase => self.config.approval_delay_ms,
            LedgerOperation::Mint => self.config.mint_delay_ms,
            LedgerOperation::Redeem => self.config.redemption_delay_ms,
        };
        Duration::from_millis(ms)
    }

    /// Base64 HMAC-SHA256 of `payload` under the configured signing key
    pub fn sign(&self, payload: &str) -> AppResult<String> {
        let mut mac = HmacSha256::new_from_slice(self.config.signing_key.as_bytes())
            .map_err(|e| AppError::Configuration(format!("Invalid signing key: {}", e)))?;
        mac.update(payload.as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }

    /// Wait for the simulated approval and sign the instruction
    pub async fn submit(
        &self,
        operation: LedgerOperation,
        payload: &str,
    ) -> AppResult<LedgerConfirmation> {
        let delay = self.delay(operation);
        tracing::debug!(operation = operation.as_str(), ?delay, "Submitting to simulated ledger");

        tokio::time::timeout(
            Duration::from_millis(self.config.timeout_ms),
            tokio::time::sleep(delay),
        )
        .await
        .map_err(|_| AppError::LedgerTimeout(operation.as_str().to_string()))?;

        let signature = self.sign(&format!("{}:{}", operation.as_str(), payload))?;
        tracing::info!(
            operation = operation.as_str(),
            signature = %signature,
            "Simulated ledger confirmed"
        );

        Ok(LedgerConfirmation {
            short_signature: shared::format::shorten_signature(&signature, 4, 4),
            signature,
            confirmed_at: Utc::now(),
        })
    }
}
