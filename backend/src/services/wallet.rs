//! Simulated wallet connection

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::flows::{FlowError, WalletConnection};
use shared::{WalletProvider, SUPPORTED_WALLETS};
use validator::Validate;

use super::ledger::{LedgerOperation, SimulatedLedger};
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Validate)]
pub struct ConnectRequest {
    #[validate(length(min = 1, max = 64, message = "Wallet name is required"))]
    pub wallet: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedWallet {
    pub connection: WalletConnection,
    pub short_address: String,
    pub usdc_balance: Decimal,
}

pub struct WalletService {
    ledger: Arc<SimulatedLedger>,
    balance: Decimal,
}

impl WalletService {
    pub fn new(ledger: Arc<SimulatedLedger>, balance: Decimal) -> Self {
        Self { ledger, balance }
    }

    pub fn supported() -> &'static [WalletProvider] {
        SUPPORTED_WALLETS
    }

    /// Connect a supported wallet once the simulated approval resolves.
    ///
    /// The address is derived from the signing key and the wallet name so a
    /// given wallet always reports the same account.
    pub async fn connect(&self, request: ConnectRequest) -> AppResult<ConnectedWallet> {
        request
            .validate()
            .map_err(|errors| FlowError::from_validation(&errors))?;

        let mut connection = WalletConnection::default();
        let provider = connection.connect(&request.wallet)?;

        let confirmation = self
            .ledger
            .submit(LedgerOperation::Connect, provider.name)
            .await?;
        let address: String = confirmation
            .signature
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .take(32)
            .collect();
        if address.is_empty() {
            return Err(AppError::Internal("Empty wallet address".to_string()));
        }

        let short_address = shared::format::shorten_signature(&address, 4, 4);
        connection.approve(address)?;
        tracing::info!(wallet = provider.name, address = %short_address, "Wallet connected");

        Ok(ConnectedWallet {
            connection,
            short_address,
            usdc_balance: self.balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use tokio_test::assert_ok;

    fn service() -> WalletService {
        let config = SimulationConfig {
            connect_delay_ms: 0,
            ..SimulationConfig::default()
        };
        WalletService::new(Arc::new(SimulatedLedger::new(config)), Decimal::new(125050, 2))
    }

    #[test]
    fn test_supported_wallets() {
        let names: Vec<&str> = WalletService::supported().iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["Phantom", "Solflare", "Backpack", "Glow", "Slope"]);
    }

    #[tokio::test]
    async fn test_connect_is_stable_per_wallet() {
        let service = service();
        let first = assert_ok!(
            service
                .connect(ConnectRequest {
                    wallet: "phantom".to_string()
                })
                .await
        );
        let second = assert_ok!(
            service
                .connect(ConnectRequest {
                    wallet: "Phantom".to_string()
                })
                .await
        );
        assert!(first.connection.is_connected());
        assert_eq!(first.connection, second.connection);
        assert_eq!(first.usdc_balance, Decimal::new(125050, 2));
        assert!(matches!(
            first.connection,
            WalletConnection::Connected { wallet: "Phantom", .. }
        ));
    }

    #[tokio::test]
    async fn test_empty_wallet_name() {
        let result = service()
            .connect(ConnectRequest {
                wallet: String::new(),
            })
            .await;
        assert!(matches!(
            result,
            Err(AppError::Validation { ref message, .. }) if message == "Wallet name is required"
        ));
    }

    #[tokio::test]
    async fn test_unknown_wallet() {
        let result = service()
            .connect(ConnectRequest {
                wallet: "MetaMask".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation { ref field, .. }) if field == "wallet"));
    }
}
