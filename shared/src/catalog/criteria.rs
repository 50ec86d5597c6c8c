//! Filter criteria selected in the marketplace sidebar

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CertificateStatus, RenewableType};

/// Upper bound of the price slider, in USDC
pub const DEFAULT_PRICE_MAX: Decimal = Decimal::ONE_HUNDRED;

/// Upper bound of the carbon intensity slider, in gCO2/kWh
pub const DEFAULT_CARBON_MAX: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Inclusive price interval `[min, max]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange(pub Decimal, pub Decimal);

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self(min, max)
    }

    pub fn min(&self) -> Decimal {
        self.0
    }

    pub fn max(&self) -> Decimal {
        self.1
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.0 && value <= self.1
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self(Decimal::ZERO, DEFAULT_PRICE_MAX)
    }
}

/// Facet selections of the marketplace listing.
///
/// An empty set places no constraint on its facet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub generators: BTreeSet<String>,
    pub regions: BTreeSet<String>,
    pub renewable_types: BTreeSet<RenewableType>,
    pub status: BTreeSet<CertificateStatus>,
    pub price_range: PriceRange,
    pub carbon_max: Decimal,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            generators: BTreeSet::new(),
            regions: BTreeSet::new(),
            renewable_types: BTreeSet::new(),
            status: BTreeSet::new(),
            price_range: PriceRange::default(),
            carbon_max: DEFAULT_CARBON_MAX,
        }
    }
}

/// Add `value` if absent, remove it if present
fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

impl FilterCriteria {
    pub fn toggle_generator(&mut self, name: impl Into<String>) {
        toggle(&mut self.generators, name.into());
    }

    pub fn toggle_region(&mut self, region: impl Into<String>) {
        toggle(&mut self.regions, region.into());
    }

    pub fn toggle_renewable_type(&mut self, renewable_type: RenewableType) {
        toggle(&mut self.renewable_types, renewable_type);
    }

    pub fn toggle_status(&mut self, status: CertificateStatus) {
        toggle(&mut self.status, status);
    }

    /// Number of selected checkbox values; sliders are not counted
    pub fn active_filter_count(&self) -> usize {
        self.generators.len() + self.regions.len() + self.renewable_types.len() + self.status.len()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_slider_bounds() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.price_range, PriceRange(Decimal::ZERO, Decimal::from(100)));
        assert_eq!(criteria.carbon_max, Decimal::from(50));
        assert_eq!(criteria.active_filter_count(), 0);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_status(CertificateStatus::BuyNow);
        criteria.toggle_region("Ireland");
        criteria.toggle_renewable_type(RenewableType::Wind);
        assert_eq!(criteria.active_filter_count(), 3);

        criteria.toggle_status(CertificateStatus::BuyNow);
        assert!(criteria.status.is_empty());
        assert_eq!(criteria.active_filter_count(), 2);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_generator("Kerry Solar Park");
        criteria.carbon_max = Decimal::from(10);
        criteria.reset();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange::new(Decimal::from(30), Decimal::from(50));
        assert!(range.contains(Decimal::from(30)));
        assert!(range.contains(Decimal::from(50)));
        assert!(!range.contains(Decimal::new(5001, 2)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"carbonMax": 20, "status": ["On Auction"]}"#).unwrap();
        assert_eq!(criteria.carbon_max, Decimal::from(20));
        assert_eq!(criteria.price_range, PriceRange::default());
        assert!(criteria.status.contains(&CertificateStatus::OnAuction));
    }
}
