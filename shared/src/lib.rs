//! Shared types and models for the GO Marketplace
//!
//! This crate contains the certificate catalog, the query pipeline used by the
//! marketplace listing, and the dialog flows shared between the backend, the
//! frontend (via WASM), and other components of the system.

pub mod catalog;
pub mod error;
pub mod fees;
pub mod fixtures;
pub mod flows;
pub mod format;
pub mod models;
pub mod types;
pub mod validation;

pub use catalog::*;
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
