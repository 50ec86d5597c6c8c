//! Validation utilities for marketplace inputs

use rust_decimal::Decimal;

use crate::catalog::PriceRange;
use crate::fees::FeeBreakdown;

// ============================================================================
// Trading Validations
// ============================================================================

/// Validate a bid against the auction minimum and the wallet balance
pub fn validate_bid_amount(
    amount: Decimal,
    min_bid: Decimal,
    balance: Decimal,
) -> Result<(), &'static str> {
    if amount <= Decimal::ZERO {
        return Err("Bid amount must be positive");
    }
    if amount < min_bid {
        return Err("Bid is below the minimum bid");
    }
    if !FeeBreakdown::for_amount(amount).is_some_and(|fees| fees.affordable_with(balance)) {
        return Err("Insufficient USDC balance");
    }
    Ok(())
}

/// Validate a price filter interval
pub fn validate_price_range(range: &PriceRange) -> Result<(), &'static str> {
    if range.min() < Decimal::ZERO {
        return Err("Minimum price cannot be negative");
    }
    if range.min() > range.max() {
        return Err("Minimum price must not exceed maximum price");
    }
    Ok(())
}

/// Validate a carbon intensity ceiling in gCO2/kWh
pub fn validate_carbon_max(carbon_max: Decimal) -> Result<(), &'static str> {
    if carbon_max < Decimal::ZERO {
        return Err("Carbon intensity limit cannot be negative");
    }
    Ok(())
}

// ============================================================================
// Generator Validations
// ============================================================================

/// Validate generator id format, e.g. "WF-IE-001"
///
/// Two uppercase letters for the technology, two for the country and a
/// numeric sequence.
pub fn validate_generator_id(id: &str) -> Result<(), &'static str> {
    let parts: Vec<&str> = id.split('-').collect();
    if parts.len() != 3 {
        return Err("Generator id must have three dash-separated parts");
    }
    let is_code = |s: &str| s.len() == 2 && s.chars().all(|c| c.is_ascii_uppercase());
    if !is_code(parts[0]) || !is_code(parts[1]) {
        return Err("Generator id must start with technology and country codes");
    }
    if parts[2].is_empty() || !parts[2].chars().all(|c| c.is_ascii_digit()) {
        return Err("Generator id must end with a numeric sequence");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_amount() {
        let balance = Decimal::new(125050, 2);
        assert!(validate_bid_amount(Decimal::from(46), Decimal::from(46), balance).is_ok());
        assert_eq!(
            validate_bid_amount(Decimal::from(45), Decimal::from(46), balance),
            Err("Bid is below the minimum bid")
        );
        assert_eq!(
            validate_bid_amount(Decimal::from(1250), Decimal::from(46), balance),
            Err("Insufficient USDC balance")
        );
        assert!(validate_bid_amount(Decimal::ZERO, Decimal::ZERO, balance).is_err());
        assert_eq!(
            validate_bid_amount(Decimal::MAX, Decimal::from(46), Decimal::MAX),
            Err("Insufficient USDC balance")
        );
    }

    #[test]
    fn test_price_range() {
        assert!(validate_price_range(&PriceRange::default()).is_ok());
        assert!(validate_price_range(&PriceRange::new(Decimal::from(60), Decimal::from(50))).is_err());
        assert!(validate_price_range(&PriceRange::new(Decimal::from(-1), Decimal::from(50))).is_err());
    }

    #[test]
    fn test_generator_id() {
        assert!(validate_generator_id("WF-IE-001").is_ok());
        assert!(validate_generator_id("SP-DE-045").is_ok());
        assert!(validate_generator_id("WF-IE").is_err());
        assert!(validate_generator_id("wf-IE-001").is_err());
        assert!(validate_generator_id("WF-IE-00A").is_err());
    }
}
