//! Static demo data bundled with the crate
//!
//! The catalog and the dashboard data are compiled in so that the server and
//! the WASM module start without any file system access.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::catalog::CertificateStore;
use crate::error::ModelError;
use crate::models::{
    generation_series, Activity, Bid, Certificate, ErrorLogEntry, GenerationPoint,
    GeneratorStats, IngestionStatus, WorkerHealth,
};

pub const CERTIFICATES_JSON: &str = include_str!("../fixtures/certificates.json");
pub const DASHBOARD_JSON: &str = include_str!("../fixtures/dashboard.json");

/// Generator shown on the generator dashboard
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorProfile {
    pub generator_id: String,
    pub name: String,
    pub stats: GeneratorStats,
    pub series_start: DateTime<Utc>,
}

impl GeneratorProfile {
    pub fn generation(&self) -> Vec<GenerationPoint> {
        generation_series(self.series_start)
    }
}

/// Everything outside the catalog: the connected user's portfolio and feed,
/// the generator dashboard and the admin dashboard
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub owned_ids: Vec<String>,
    pub bids: Vec<Bid>,
    pub activity_feed: Vec<Activity>,
    pub generator: GeneratorProfile,
    pub workers: Vec<WorkerHealth>,
    pub ingestion: Vec<IngestionStatus>,
    pub error_log: Vec<ErrorLogEntry>,
}

impl Dashboard {
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Owned certificates in the order listed, skipping ids the store lacks
    pub fn owned<'a>(&self, store: &'a CertificateStore) -> Vec<&'a Certificate> {
        self.owned_ids.iter().filter_map(|id| store.get(id)).collect()
    }
}

/// Catalog plus dashboard data
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub store: CertificateStore,
    pub dashboard: Dashboard,
}

impl Fixtures {
    /// Load the bundled fixtures
    pub fn load() -> Result<Self, ModelError> {
        Self::from_json(CERTIFICATES_JSON, DASHBOARD_JSON)
    }

    pub fn from_json(certificates: &str, dashboard: &str) -> Result<Self, ModelError> {
        let store = CertificateStore::from_json(certificates)?;
        let dashboard = Dashboard::from_json(dashboard)?;

        if let Some(missing) = dashboard.owned_ids.iter().find(|id| store.get(id).is_none()) {
            return Err(ModelError::InvalidFixture(format!(
                "owned certificate {missing} is not in the catalog"
            )));
        }

        Ok(Self { store, dashboard })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CertificateStatus;

    #[test]
    fn test_bundled_fixtures_load() {
        let fixtures = Fixtures::load().unwrap();
        assert_eq!(fixtures.store.len(), 14);
        assert_eq!(fixtures.dashboard.bids.len(), 2);
        assert_eq!(fixtures.dashboard.activity_feed.len(), 5);
    }

    #[test]
    fn test_owned_certificates_are_sold_out() {
        let fixtures = Fixtures::load().unwrap();
        let owned = fixtures.dashboard.owned(&fixtures.store);
        let ids: Vec<&str> = owned.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["go-005", "go-013"]);
        assert!(owned.iter().all(|c| c.status() == CertificateStatus::SoldOut));
    }

    #[test]
    fn test_slices_are_synthesized() {
        let fixtures = Fixtures::load().unwrap();
        let wexford = fixtures.store.get("go-001").unwrap();
        assert_eq!(wexford.slices.len(), 144);
        let kerry = fixtures.store.get("go-002").unwrap();
        assert_eq!(kerry.slices.len(), 72);
    }

    #[test]
    fn test_unknown_owned_id_is_rejected() {
        let dashboard = DASHBOARD_JSON.replace("go-013", "go-999");
        let err = Fixtures::from_json(CERTIFICATES_JSON, &dashboard).unwrap_err();
        assert!(matches!(err, ModelError::InvalidFixture(_)));
    }
}
