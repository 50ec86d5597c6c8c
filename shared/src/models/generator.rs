//! Generator dashboard models

use chrono::{DateTime, Duration, Timelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SLICE_MINUTES;

/// Volume represented by one minted certificate, in MWh
pub const MINT_UNIT_MWH: Decimal = Decimal::ONE;

/// Slices per day at ten-minute resolution
pub const SLICES_PER_DAY: u32 = 144;

/// Live figures for a generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorStats {
    pub generator_id: String,
    /// MW
    pub live_power: Decimal,
    pub last_slice_timestamp: DateTime<Utc>,
    pub slices_in_bucket: u32,
    /// MWh accrued towards the next certificate
    pub accrued_volume: Decimal,
    pub mintable_units: u32,
    /// MWh
    pub lifetime_minted: u32,
    pub carbon_intensity: Decimal,
}

impl GeneratorStats {
    pub fn can_mint(&self) -> bool {
        self.mintable_units > 0
    }

    /// Fraction of the current bucket filled, in [0, 1]
    pub fn mint_progress(&self) -> Decimal {
        (self.accrued_volume / MINT_UNIT_MWH).clamp(Decimal::ZERO, Decimal::ONE)
    }
}

/// One point of the daily generation chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPoint {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "kWh")]
    pub kwh: Decimal,
    /// "HH:MM"
    pub formatted: String,
}

/// Typical wind output per ten minutes by time of day, in kWh
fn base_output(hour: u32) -> Decimal {
    match hour {
        0..=5 => Decimal::new(72, 1),
        6..=11 => Decimal::new(58, 1),
        12..=17 => Decimal::new(69, 1),
        _ => Decimal::new(75, 1),
    }
}

/// Build a full day of generation points starting at `day_start`
pub fn generation_series(day_start: DateTime<Utc>) -> Vec<GenerationPoint> {
    (0..SLICES_PER_DAY)
        .map(|i| {
            let time = day_start + Duration::minutes(SLICE_MINUTES * i64::from(i));
            // 0.85 to 1.15
            let variance = Decimal::new(85, 2)
                + Decimal::new(30, 2) * Decimal::from((i * 53 + 7) % 31) / Decimal::from(30);

            GenerationPoint {
                timestamp: time,
                kwh: (base_output(time.hour()) * variance).round_dp(2),
                formatted: time.format("%H:%M").to_string(),
            }
        })
        .collect()
}
