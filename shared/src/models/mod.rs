//! Domain models for the GO Marketplace

mod activity;
mod bid;
mod certificate;
mod generator;
mod listing;
mod observability;
mod portfolio;
mod record;
mod slice;
mod wallet;

pub use activity::*;
pub use bid::*;
pub use certificate::*;
pub use generator::*;
pub use listing::*;
pub use observability::*;
pub use portfolio::*;
pub use record::*;
pub use slice::*;
pub use wallet::*;
