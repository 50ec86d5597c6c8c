//! Wallet connection dialog

use serde::Serialize;

use super::{invalid, FlowError};
use crate::models::{find_wallet, WalletProvider};

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum WalletConnection {
    #[default]
    Disconnected,
    Connecting { wallet: &'static str },
    Connected { wallet: &'static str, address: String },
}

impl WalletConnection {
    fn name(&self) -> &'static str {
        match self {
            WalletConnection::Disconnected => "disconnected",
            WalletConnection::Connecting { .. } => "connecting",
            WalletConnection::Connected { .. } => "connected",
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, WalletConnection::Connected { .. })
    }

    /// Pick a supported wallet and wait for its approval
    pub fn connect(&mut self, wallet: &str) -> Result<&'static WalletProvider, FlowError> {
        if !matches!(self, WalletConnection::Disconnected) {
            return Err(invalid("connect", self.name()));
        }
        let provider =
            find_wallet(wallet).ok_or_else(|| FlowError::UnknownWallet(wallet.to_string()))?;
        *self = WalletConnection::Connecting {
            wallet: provider.name,
        };
        Ok(provider)
    }

    pub fn approve(&mut self, address: impl Into<String>) -> Result<(), FlowError> {
        match *self {
            WalletConnection::Connecting { wallet } => {
                *self = WalletConnection::Connected {
                    wallet,
                    address: address.into(),
                };
                Ok(())
            }
            _ => Err(invalid("approve a connection", self.name())),
        }
    }

    pub fn disconnect(&mut self) {
        *self = WalletConnection::Disconnected;
    }
}
