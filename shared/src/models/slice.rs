//! Generation slice models

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Length of one generation slice
pub const SLICE_MINUTES: i64 = 10;

/// Number of trailing slices not yet fully minted on-chain
const UNMINTED_TAIL: u32 = 10;

/// A ten-minute generation measurement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Slice {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "kWh")]
    pub kwh: Decimal,
    pub co2e: Decimal,
    pub source_status: SourceStatus,
    pub on_chain_status: OnChainStatus,
}

impl Slice {
    /// Grams of CO2e per kWh for this slice
    pub fn carbon_intensity(&self) -> Option<Decimal> {
        if self.kwh.is_zero() {
            return None;
        }
        Some((self.co2e / self.kwh).round_dp(2))
    }
}

/// Verification status reported by the metering source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    Verified,
    Pending,
    Failed,
}

/// Whether the slice has been committed on-chain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OnChainStatus {
    Minted,
    Pending,
    None,
}

/// Compact description of a slice series, used by fixture files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SliceProfile {
    pub count: u32,
    pub avg_kwh: Decimal,
    pub avg_co2: Decimal,
}

/// Deterministic multiplier in [0.8, 1.2] for slice `index`
fn slice_variance(index: u32) -> Decimal {
    let step = Decimal::from((u64::from(index) * 37 + 11) % 41);
    Decimal::new(8, 1) + Decimal::new(4, 1) * step / Decimal::from(40)
}

/// Expand a profile into `count` consecutive ten-minute slices starting at `start`
pub fn synthesize_slices(start: DateTime<Utc>, profile: &SliceProfile) -> Vec<Slice> {
    (0..profile.count)
        .map(|i| {
            let variance = slice_variance(i);
            let source_status = if i % 20 == 19 {
                SourceStatus::Pending
            } else {
                SourceStatus::Verified
            };
            let on_chain_status = if i < profile.count.saturating_sub(UNMINTED_TAIL) {
                OnChainStatus::Minted
            } else if i % 2 == 0 {
                OnChainStatus::Pending
            } else {
                OnChainStatus::None
            };

            Slice {
                timestamp: start + Duration::minutes(SLICE_MINUTES * i64::from(i)),
                kwh: (profile.avg_kwh * variance).round_dp(2),
                co2e: (profile.avg_co2 * variance).round_dp(2),
                source_status,
                on_chain_status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn profile(count: u32) -> SliceProfile {
        SliceProfile {
            count,
            avg_kwh: Decimal::new(65, 1),
            avg_co2: Decimal::from(12),
        }
    }

    #[test]
    fn test_variance_bounds() {
        for i in (0..500).chain(u32::MAX - 500..=u32::MAX) {
            let v = slice_variance(i);
            assert!(v >= Decimal::new(8, 1) && v <= Decimal::new(12, 1), "{}", v);
        }
    }

    #[test]
    fn test_profile_shorter_than_unminted_tail() {
        let start = Utc.with_ymd_and_hms(2025, 10, 29, 0, 0, 0).unwrap();
        let slices = synthesize_slices(start, &profile(3));
        assert!(slices
            .iter()
            .all(|s| s.on_chain_status != OnChainStatus::Minted));
    }

    #[test]
    fn test_slices_are_ten_minutes_apart() {
        let start = Utc.with_ymd_and_hms(2025, 10, 29, 0, 0, 0).unwrap();
        let slices = synthesize_slices(start, &profile(144));
        assert_eq!(slices.len(), 144);
        assert_eq!(slices[0].timestamp, start);
        assert_eq!(slices[143].timestamp, start + Duration::minutes(1430));
    }

    #[test]
    fn test_only_tail_is_unminted() {
        let start = Utc.with_ymd_and_hms(2025, 10, 29, 0, 0, 0).unwrap();
        let slices = synthesize_slices(start, &profile(30));
        assert!(slices[..20]
            .iter()
            .all(|s| s.on_chain_status == OnChainStatus::Minted));
        assert!(slices[20..]
            .iter()
            .all(|s| s.on_chain_status != OnChainStatus::Minted));
    }

    #[test]
    fn test_slices_are_deterministic() {
        let start = Utc.with_ymd_and_hms(2025, 10, 29, 0, 0, 0).unwrap();
        assert_eq!(
            synthesize_slices(start, &profile(72)),
            synthesize_slices(start, &profile(72))
        );
    }
}
