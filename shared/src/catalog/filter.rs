//! Filter predicates over a certificate and the current criteria
//!
//! Each predicate is independent; [`matches`] is their conjunction.

use super::FilterCriteria;
use crate::models::Certificate;

/// Case-insensitive substring match on generator name or location.
/// An empty query matches everything.
pub fn matches_text(cert: &Certificate, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    cert.generator_name.to_lowercase().contains(&needle)
        || cert.location.to_lowercase().contains(&needle)
}

pub fn matches_status(cert: &Certificate, criteria: &FilterCriteria) -> bool {
    criteria.status.is_empty() || criteria.status.contains(&cert.status())
}

/// At least one selected region must occur in the certificate's region token
pub fn matches_region(cert: &Certificate, criteria: &FilterCriteria) -> bool {
    if criteria.regions.is_empty() {
        return true;
    }
    let token = cert.region_token();
    criteria
        .regions
        .iter()
        .any(|region| token.contains(region.as_str()))
}

pub fn matches_price(cert: &Certificate, criteria: &FilterCriteria) -> bool {
    criteria.price_range.contains(cert.effective_price())
}

pub fn matches_carbon(cert: &Certificate, criteria: &FilterCriteria) -> bool {
    cert.carbon_intensity <= criteria.carbon_max
}

pub fn matches_generator(cert: &Certificate, criteria: &FilterCriteria) -> bool {
    criteria.generators.is_empty() || criteria.generators.contains(&cert.generator_name)
}

pub fn matches_renewable_type(cert: &Certificate, criteria: &FilterCriteria) -> bool {
    criteria.renewable_types.is_empty() || criteria.renewable_types.contains(&cert.renewable_type)
}

/// Whether `cert` belongs in the listing for `criteria` and the search `query`
pub fn matches(cert: &Certificate, criteria: &FilterCriteria, query: &str) -> bool {
    matches_text(cert, query)
        && matches_status(cert, criteria)
        && matches_region(cert, criteria)
        && matches_price(cert, criteria)
        && matches_carbon(cert, criteria)
        && matches_generator(cert, criteria)
        && matches_renewable_type(cert, criteria)
}
