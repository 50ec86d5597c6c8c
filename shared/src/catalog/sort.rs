//! Sort orders of the marketplace listing

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::models::Certificate;

/// Selectable sort order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Latest generation window first
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    /// Earliest auction end first, non-auctions last
    EndingSoon,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::EndingSoon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::EndingSoon => "ending-soon",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::EndingSoon => "Ending Soon",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| ModelError::UnknownSortKey(s.to_string()))
    }
}

/// Order two certificates under `key`. Equal keys compare `Equal`; callers
/// rely on a stable sort to keep catalog order for ties.
pub fn compare(a: &Certificate, b: &Certificate, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => b.time_window.start.cmp(&a.time_window.start),
        SortKey::PriceAsc => a.effective_price().cmp(&b.effective_price()),
        SortKey::PriceDesc => b.effective_price().cmp(&a.effective_price()),
        SortKey::EndingSoon => match (a.auction_ends(), b.auction_ends()) {
            (Some(a_end), Some(b_end)) => a_end.cmp(&b_end),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_names() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert_eq!(
            "cheapest".parse::<SortKey>(),
            Err(ModelError::UnknownSortKey("cheapest".to_string()))
        );
    }

    #[test]
    fn test_sort_key_serde_matches_display() {
        let json = serde_json::to_string(&SortKey::EndingSoon).unwrap();
        assert_eq!(json, "\"ending-soon\"");
        assert_eq!(SortKey::default(), SortKey::Newest);
    }
}
