//! Business logic services for the GO Marketplace

pub mod activity;
pub mod admin;
pub mod catalog;
pub mod generator;
pub mod ledger;
pub mod portfolio;
pub mod trading;
pub mod wallet;

pub use activity::ActivityService;
pub use admin::AdminService;
pub use catalog::CatalogService;
pub use generator::GeneratorService;
pub use ledger::SimulatedLedger;
pub use portfolio::PortfolioService;
pub use trading::TradingService;
pub use wallet::WalletService;
