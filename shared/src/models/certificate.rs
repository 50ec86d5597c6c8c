//! Guarantee-of-Origin certificate models

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Activity, CertificateRecord, CertificateStatus, Listing, Slice};
use crate::error::ModelError;

/// One tradable unit of renewable generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CertificateRecord", into = "CertificateRecord")]
pub struct Certificate {
    pub id: String,
    pub generator_name: String,
    pub generator_id: String,
    /// Display location, e.g. "Wexford" or "Cork, Ireland"
    pub location: String,
    /// Normalized country used for region filtering
    pub country: Option<String>,
    pub time_window: TimeWindow,
    /// Energy volume in MWh
    pub volume: Decimal,
    pub listing: Listing,
    /// gCO2/kWh
    pub carbon_intensity: Decimal,
    pub renewable_type: RenewableType,
    pub verification_badges: Vec<String>,
    pub nft_image: String,
    pub attributes: BTreeMap<String, String>,
    pub slices: Vec<Slice>,
    pub activities: Vec<Activity>,
}

impl Certificate {
    pub fn status(&self) -> CertificateStatus {
        self.listing.status()
    }

    pub fn price(&self) -> Option<Decimal> {
        self.listing.price()
    }

    pub fn current_bid(&self) -> Option<Decimal> {
        self.listing.current_bid()
    }

    pub fn auction_ends(&self) -> Option<DateTime<Utc>> {
        self.listing.auction_ends()
    }

    pub fn effective_price(&self) -> Decimal {
        self.listing.effective_price()
    }

    /// Country token used by the region facet.
    ///
    /// Prefers the normalized `country` field and falls back to the text after
    /// the last comma of the display location.
    pub fn region_token(&self) -> &str {
        match &self.country {
            Some(country) => country.as_str(),
            None => self
                .location
                .rsplit(',')
                .next()
                .unwrap_or_default()
                .trim(),
        }
    }

    /// Card title, e.g. "Wexford Wind Farm • Oct 29, 2025"
    pub fn display_name(&self) -> String {
        format!(
            "{} • {}",
            self.generator_name,
            crate::format::format_date(self.time_window.start)
        )
    }

    /// Sum of slice energy in kWh
    pub fn sliced_energy_kwh(&self) -> Decimal {
        self.slices.iter().map(|s| s.kwh).sum()
    }
}

/// Generation period covered by a certificate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Generation technology
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RenewableType {
    Wind,
    Solar,
    Hydro,
}

impl RenewableType {
    pub const ALL: [RenewableType; 3] = [
        RenewableType::Wind,
        RenewableType::Solar,
        RenewableType::Hydro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RenewableType::Wind => "wind",
            RenewableType::Solar => "solar",
            RenewableType::Hydro => "hydro",
        }
    }
}

impl std::fmt::Display for RenewableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenewableType::Wind => write!(f, "Wind"),
            RenewableType::Solar => write!(f, "Solar"),
            RenewableType::Hydro => write!(f, "Hydro"),
        }
    }
}

impl std::str::FromStr for RenewableType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wind" => Ok(RenewableType::Wind),
            "solar" => Ok(RenewableType::Solar),
            "hydro" => Ok(RenewableType::Hydro),
            _ => Err(ModelError::UnknownRenewableType(s.to_string())),
        }
    }
}
