//! Configuration management for the GO Marketplace server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with GOM__ prefix

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Catalog source
    pub catalog: CatalogConfig,

    /// Simulated wallet and ledger timings
    pub simulation: SimulationConfig,

    /// Demo wallet
    pub wallet: WalletConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON array of certificate records; the bundled catalog when unset
    pub fixture_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    /// Wallet connection approval delay
    pub connect_delay_ms: u64,

    /// Bid and purchase approval delay
    pub approval_delay_ms: u64,

    /// Mint confirmation delay
    pub mint_delay_ms: u64,

    /// Redemption confirmation delay
    pub redemption_delay_ms: u64,

    /// Upper bound for any simulated ledger call
    pub timeout_ms: u64,

    /// HMAC key for simulated transaction signatures
    pub signing_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WalletConfig {
    /// USDC balance of the connected demo wallet
    pub balance_usdc: Decimal,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("GOM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("simulation.connect_delay_ms", 500)?
            .set_default("simulation.approval_delay_ms", 2000)?
            .set_default("simulation.mint_delay_ms", 3000)?
            .set_default("simulation.redemption_delay_ms", 2000)?
            .set_default("simulation.timeout_ms", 10000)?
            .set_default("simulation.signing_key", "go-marketplace-dev-key")?
            .set_default("wallet.balance_usdc", "1250.50")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (GOM__ prefix)
            .add_source(
                Environment::with_prefix("GOM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            connect_delay_ms: 500,
            approval_delay_ms: 2000,
            mint_delay_ms: 3000,
            redemption_delay_ms: 2000,
            timeout_ms: 10000,
            signing_key: "go-marketplace-dev-key".to_string(),
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            balance_usdc: shared::fees::DEMO_BALANCE_USDC,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            catalog: CatalogConfig::default(),
            simulation: SimulationConfig::default(),
            wallet: WalletConfig::default(),
        }
    }
}
