//! Read-only certificate catalog

use std::collections::HashSet;

use serde::Serialize;

use super::CatalogQuery;
use crate::error::ModelError;
use crate::models::{Certificate, CertificateRecord, CertificateStatus, RenewableType};

/// In-memory catalog, built once and never mutated
#[derive(Debug, Clone, Default)]
pub struct CertificateStore {
    certificates: Vec<Certificate>,
}

/// Values offered by the sidebar checkboxes
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFacets {
    pub generators: Vec<String>,
    pub regions: Vec<String>,
    pub renewable_types: Vec<RenewableType>,
    pub statuses: Vec<CertificateStatus>,
}

impl CertificateStore {
    /// Build a store, rejecting duplicate ids
    pub fn new(certificates: Vec<Certificate>) -> Result<Self, ModelError> {
        let mut seen = HashSet::new();
        for cert in &certificates {
            if !seen.insert(cert.id.as_str()) {
                return Err(ModelError::DuplicateId(cert.id.clone()));
            }
        }
        Ok(Self { certificates })
    }

    pub fn from_records(records: Vec<CertificateRecord>) -> Result<Self, ModelError> {
        let certificates = records
            .into_iter()
            .map(Certificate::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(certificates)
    }

    /// Parse a JSON array of certificate records
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let records: Vec<CertificateRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn all(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn get(&self, id: &str) -> Option<&Certificate> {
        self.certificates.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    pub fn query(&self, query: &CatalogQuery) -> Vec<&Certificate> {
        query.run(&self.certificates)
    }

    /// Distinct facet values in catalog order
    pub fn facets(&self) -> CatalogFacets {
        fn distinct<T: Clone + PartialEq>(values: impl Iterator<Item = T>) -> Vec<T> {
            let mut out: Vec<T> = Vec::new();
            for value in values {
                if !out.contains(&value) {
                    out.push(value);
                }
            }
            out
        }

        CatalogFacets {
            generators: distinct(self.certificates.iter().map(|c| c.generator_name.clone())),
            regions: distinct(
                self.certificates
                    .iter()
                    .map(|c| c.region_token().to_string())
                    .filter(|r| !r.is_empty()),
            ),
            renewable_types: RenewableType::ALL.to_vec(),
            statuses: CertificateStatus::ALL.to_vec(),
        }
    }
}
