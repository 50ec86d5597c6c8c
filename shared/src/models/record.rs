//! Flat wire/fixture representation of a certificate
//!
//! Fixtures and API payloads use the flat shape the marketplace frontend
//! renders: optional price and auction fields next to a status string.
//! Converting into [`Certificate`] checks that an auction carries its full
//! terms. Price and bid fields on other statuses are kept as given.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    synthesize_slices, Activity, AuctionTerms, Certificate, CertificateStatus, Listing, Quote,
    RenewableType, Slice, SliceProfile, TimeWindow,
};
use crate::error::ModelError;

/// Certificate as it appears in fixture files and JSON responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    pub id: String,
    pub generator_name: String,
    pub generator_id: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub time_window: TimeWindow,
    pub volume: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_bid: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bid: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserve: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auction_ends: Option<DateTime<Utc>>,
    pub carbon_intensity: Decimal,
    pub renewable_type: RenewableType,
    pub status: CertificateStatus,
    #[serde(default)]
    pub verification_badges: Vec<String>,
    #[serde(default)]
    pub nft_image: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub slices: Vec<Slice>,
    /// Used by fixtures instead of listing every slice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slice_profile: Option<SliceProfile>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl CertificateRecord {
    fn listing(&self) -> Result<Listing, ModelError> {
        let quote = Quote {
            price: self.price,
            current_bid: self.current_bid,
        };

        match self.status {
            CertificateStatus::OnAuction => {
                let missing = |field: &'static str| ModelError::IncompleteAuction {
                    id: self.id.clone(),
                    field,
                };
                Ok(Listing::Auction(AuctionTerms {
                    current_bid: self.current_bid.ok_or_else(|| missing("currentBid"))?,
                    min_bid: self.min_bid.ok_or_else(|| missing("minBid"))?,
                    reserve: self.reserve.ok_or_else(|| missing("reserve"))?,
                    ends_at: self.auction_ends.ok_or_else(|| missing("auctionEnds"))?,
                    price: self.price,
                }))
            }
            CertificateStatus::BuyNow => Ok(Listing::BuyNow(quote)),
            CertificateStatus::Soon => Ok(Listing::Upcoming(quote)),
            CertificateStatus::SoldOut => Ok(Listing::SoldOut(quote)),
        }
    }
}

impl TryFrom<CertificateRecord> for Certificate {
    type Error = ModelError;

    fn try_from(record: CertificateRecord) -> Result<Self, Self::Error> {
        let listing = record.listing()?;

        let slices = match (&record.slice_profile, record.slices.is_empty()) {
            (Some(profile), true) => synthesize_slices(record.time_window.start, profile),
            _ => record.slices,
        };

        Ok(Certificate {
            id: record.id,
            generator_name: record.generator_name,
            generator_id: record.generator_id,
            location: record.location,
            country: record.country,
            time_window: record.time_window,
            volume: record.volume,
            listing,
            carbon_intensity: record.carbon_intensity,
            renewable_type: record.renewable_type,
            verification_badges: record.verification_badges,
            nft_image: record.nft_image,
            attributes: record.attributes,
            slices,
            activities: record.activities,
        })
    }
}

impl From<Certificate> for CertificateRecord {
    fn from(cert: Certificate) -> Self {
        let auction = cert.listing.auction().cloned();
        CertificateRecord {
            price: cert.listing.price(),
            current_bid: cert.listing.current_bid(),
            min_bid: auction.as_ref().map(|a| a.min_bid),
            reserve: auction.as_ref().map(|a| a.reserve),
            auction_ends: auction.as_ref().map(|a| a.ends_at),
            status: cert.listing.status(),
            id: cert.id,
            generator_name: cert.generator_name,
            generator_id: cert.generator_id,
            location: cert.location,
            country: cert.country,
            time_window: cert.time_window,
            volume: cert.volume,
            carbon_intensity: cert.carbon_intensity,
            renewable_type: cert.renewable_type,
            verification_badges: cert.verification_badges,
            nft_image: cert.nft_image,
            attributes: cert.attributes,
            slices: cert.slices,
            slice_profile: None,
            activities: cert.activities,
        }
    }
}
