//! Certificate catalog and the marketplace query pipeline
//!
//! A query runs in two stages over the read-only [`CertificateStore`]:
//! every certificate is tested against the [`FilterCriteria`] and the search
//! text, then the survivors are stable-sorted by the selected [`SortKey`].
//! Nothing is cached; callers re-run the query whenever an input changes.

mod criteria;
mod filter;
mod query;
mod sort;
mod store;

pub use criteria::*;
pub use filter::*;
pub use query::*;
pub use sort::*;
pub use store::*;
