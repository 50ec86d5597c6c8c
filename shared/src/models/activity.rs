//! On-chain activity models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A lifecycle event of a certificate or a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub status: ActivityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Kinds of activity shown in timelines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityKind {
    Minted,
    Listed,
    #[serde(rename = "Bid Placed")]
    BidPlaced,
    Outbid,
    Settled,
    Redeemed,
    Transfer,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::Minted => write!(f, "Minted"),
            ActivityKind::Listed => write!(f, "Listed"),
            ActivityKind::BidPlaced => write!(f, "Bid Placed"),
            ActivityKind::Outbid => write!(f, "Outbid"),
            ActivityKind::Settled => write!(f, "Settled"),
            ActivityKind::Redeemed => write!(f, "Redeemed"),
            ActivityKind::Transfer => write!(f, "Transfer"),
        }
    }
}

/// Outcome of the transaction behind an activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Success,
    Pending,
    Failed,
}

/// Tabs of the activity feed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityFilter {
    #[default]
    All,
    /// Events that mention the current user
    You,
    /// Events from followed generators; there is no follow list yet, so everything
    Following,
}

impl ActivityFilter {
    pub fn applies(&self, activity: &Activity) -> bool {
        match self {
            ActivityFilter::All | ActivityFilter::Following => true,
            ActivityFilter::You => activity.description.to_lowercase().contains("you"),
        }
    }

    pub fn apply<'a>(&self, feed: &'a [Activity]) -> Vec<&'a Activity> {
        feed.iter().filter(|a| self.applies(a)).collect()
    }
}

impl std::str::FromStr for ActivityFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ActivityFilter::All),
            "you" => Ok(ActivityFilter::You),
            "following" => Ok(ActivityFilter::Following),
            _ => Err(ModelError::UnknownActivityFilter(s.to_string())),
        }
    }
}
