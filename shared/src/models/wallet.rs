//! Wallet provider models

use serde::Serialize;

/// A browser wallet the marketplace can connect to
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WalletProvider {
    pub name: &'static str,
    pub popular: bool,
}

pub const SUPPORTED_WALLETS: &[WalletProvider] = &[
    WalletProvider { name: "Phantom", popular: true },
    WalletProvider { name: "Solflare", popular: true },
    WalletProvider { name: "Backpack", popular: false },
    WalletProvider { name: "Glow", popular: false },
    WalletProvider { name: "Slope", popular: false },
];

/// Find a supported wallet by name, ignoring case
pub fn find_wallet(name: &str) -> Option<&'static WalletProvider> {
    SUPPORTED_WALLETS
        .iter()
        .find(|w| w.name.eq_ignore_ascii_case(name.trim()))
}
