//! Commercial listing of a certificate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Marketplace status shown on a certificate card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CertificateStatus {
    #[serde(rename = "On Auction")]
    OnAuction,
    #[serde(rename = "Buy Now")]
    BuyNow,
    #[serde(rename = "Soon")]
    Soon,
    #[serde(rename = "Sold Out")]
    SoldOut,
}

impl CertificateStatus {
    pub const ALL: [CertificateStatus; 4] = [
        CertificateStatus::OnAuction,
        CertificateStatus::BuyNow,
        CertificateStatus::Soon,
        CertificateStatus::SoldOut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateStatus::OnAuction => "On Auction",
            CertificateStatus::BuyNow => "Buy Now",
            CertificateStatus::Soon => "Soon",
            CertificateStatus::SoldOut => "Sold Out",
        }
    }
}

impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CertificateStatus {
    type Err = ModelError;

    /// Accepts the display name as well as snake/kebab case ("on_auction", "buy-now")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "on auction" => Ok(CertificateStatus::OnAuction),
            "buy now" => Ok(CertificateStatus::BuyNow),
            "soon" => Ok(CertificateStatus::Soon),
            "sold out" => Ok(CertificateStatus::SoldOut),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// Terms of a running auction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuctionTerms {
    pub current_bid: Decimal,
    pub min_bid: Decimal,
    pub reserve: Decimal,
    pub ends_at: DateTime<Utc>,
    /// Fixed price listed next to the auction, takes precedence for filtering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

/// Price and bid carried by a listing that is not a running auction
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub price: Option<Decimal>,
    pub current_bid: Option<Decimal>,
}

impl Quote {
    pub fn fixed(price: Decimal) -> Self {
        Self {
            price: Some(price),
            current_bid: None,
        }
    }
}

/// How a certificate is offered on the marketplace.
///
/// An auction always carries its full terms. The other statuses keep
/// whatever price or bid the record had, so the effective price never
/// loses data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Auction(AuctionTerms),
    BuyNow(Quote),
    Upcoming(Quote),
    SoldOut(Quote),
}

impl Listing {
    pub fn buy_now(price: Decimal) -> Self {
        Listing::BuyNow(Quote::fixed(price))
    }

    pub fn status(&self) -> CertificateStatus {
        match self {
            Listing::Auction(_) => CertificateStatus::OnAuction,
            Listing::BuyNow(_) => CertificateStatus::BuyNow,
            Listing::Upcoming(_) => CertificateStatus::Soon,
            Listing::SoldOut(_) => CertificateStatus::SoldOut,
        }
    }

    /// Fixed price, if the listing has one
    pub fn price(&self) -> Option<Decimal> {
        match self {
            Listing::Auction(terms) => terms.price,
            Listing::BuyNow(quote) | Listing::Upcoming(quote) | Listing::SoldOut(quote) => {
                quote.price
            }
        }
    }

    pub fn current_bid(&self) -> Option<Decimal> {
        match self {
            Listing::Auction(terms) => Some(terms.current_bid),
            Listing::BuyNow(quote) | Listing::Upcoming(quote) | Listing::SoldOut(quote) => {
                quote.current_bid
            }
        }
    }

    pub fn min_bid(&self) -> Option<Decimal> {
        self.auction().map(|terms| terms.min_bid)
    }

    pub fn reserve(&self) -> Option<Decimal> {
        self.auction().map(|terms| terms.reserve)
    }

    pub fn auction_ends(&self) -> Option<DateTime<Utc>> {
        self.auction().map(|terms| terms.ends_at)
    }

    pub fn auction(&self) -> Option<&AuctionTerms> {
        match self {
            Listing::Auction(terms) => Some(terms),
            _ => None,
        }
    }

    /// Price used for filtering and sorting: fixed price, else current bid, else zero
    pub fn effective_price(&self) -> Decimal {
        self.price()
            .or_else(|| self.current_bid())
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn auction() -> Listing {
        Listing::Auction(AuctionTerms {
            current_bid: Decimal::new(4550, 2),
            min_bid: Decimal::new(4600, 2),
            reserve: Decimal::from(40),
            ends_at: Utc.with_ymd_and_hms(2025, 10, 31, 14, 0, 0).unwrap(),
            price: None,
        })
    }

    #[test]
    fn test_status_follows_variant() {
        assert_eq!(auction().status(), CertificateStatus::OnAuction);
        assert_eq!(Listing::Upcoming(Quote::default()).status(), CertificateStatus::Soon);
        assert_eq!(
            Listing::SoldOut(Quote::default()).status(),
            CertificateStatus::SoldOut
        );
    }

    #[test]
    fn test_effective_price_fallback() {
        assert_eq!(
            Listing::buy_now(Decimal::from(38)).effective_price(),
            Decimal::from(38)
        );
        assert_eq!(auction().effective_price(), Decimal::new(4550, 2));
        assert_eq!(Listing::Upcoming(Quote::default()).effective_price(), Decimal::ZERO);
        assert_eq!(
            Listing::SoldOut(Quote::fixed(Decimal::from(35))).effective_price(),
            Decimal::from(35)
        );
    }

    #[test]
    fn test_fixed_price_wins_over_bid() {
        let mut listing = auction();
        if let Listing::Auction(terms) = &mut listing {
            terms.price = Some(Decimal::from(40));
        }
        assert_eq!(listing.effective_price(), Decimal::from(40));

        let quote = Quote {
            price: None,
            current_bid: Some(Decimal::from(30)),
        };
        assert_eq!(Listing::BuyNow(quote).effective_price(), Decimal::from(30));
        assert_eq!(Listing::Upcoming(quote).current_bid(), Some(Decimal::from(30)));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("On Auction".parse(), Ok(CertificateStatus::OnAuction));
        assert_eq!("buy-now".parse(), Ok(CertificateStatus::BuyNow));
        assert_eq!("sold_out".parse(), Ok(CertificateStatus::SoldOut));
        assert!("pending".parse::<CertificateStatus>().is_err());
    }
}
