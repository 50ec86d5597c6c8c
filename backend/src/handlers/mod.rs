//! HTTP handlers

pub mod admin;
pub mod certificates;
pub mod generator;
pub mod health;
pub mod portfolio;
pub mod wallet;

pub use admin::*;
pub use certificates::*;
pub use generator::*;
pub use health::*;
pub use portfolio::*;
pub use wallet::*;
