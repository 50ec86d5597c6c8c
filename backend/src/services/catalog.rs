//! Catalog service: marketplace listing, facets and certificate detail
//!
//! Query parameters are parsed into a [`CatalogQuery`] and run through the
//! shared query pipeline on every request.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    validate_carbon_max, validate_price_range, Activity, CatalogFacets, CatalogQuery, Certificate,
    CertificateStatus, CertificateStore, PaginatedResponse, Pagination, RenewableType, Slice,
    SortKey, TimeWindow,
};

use crate::error::{AppError, AppResult};

/// Catalog service over the read-only store
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<CertificateStore>,
}

/// Query string of `GET /certificates`
///
/// List parameters are comma separated, e.g. `status=On Auction,Buy Now`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateListParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub status: Option<String>,
    pub region: Option<String>,
    pub generator: Option<String>,
    #[serde(rename = "type")]
    pub renewable_type: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub carbon_max: Option<Decimal>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

fn split_list(value: &Option<String>) -> impl Iterator<Item = &str> {
    value
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

impl CertificateListParams {
    pub fn to_query(&self) -> AppResult<CatalogQuery> {
        let mut query = CatalogQuery {
            text: self.q.clone().unwrap_or_default(),
            ..CatalogQuery::default()
        };

        if let Some(sort) = &self.sort {
            query.sort = sort.parse::<SortKey>()?;
        }

        let criteria = &mut query.criteria;
        for status in split_list(&self.status) {
            criteria.status.insert(status.parse::<CertificateStatus>()?);
        }
        for renewable_type in split_list(&self.renewable_type) {
            criteria
                .renewable_types
                .insert(renewable_type.parse::<RenewableType>()?);
        }
        criteria.regions.extend(split_list(&self.region).map(String::from));
        criteria
            .generators
            .extend(split_list(&self.generator).map(String::from));

        if let Some(min) = self.min_price {
            criteria.price_range.0 = min;
        }
        if let Some(max) = self.max_price {
            criteria.price_range.1 = max;
        }
        validate_price_range(&criteria.price_range)
            .map_err(|msg| AppError::validation("minPrice", msg))?;

        if let Some(carbon_max) = self.carbon_max {
            validate_carbon_max(carbon_max).map_err(|msg| AppError::validation("carbonMax", msg))?;
            criteria.carbon_max = carbon_max;
        }

        Ok(query)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.per_page)
    }
}

/// Certificate card in the marketplace grid
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSummary {
    pub id: String,
    pub name: String,
    pub generator_name: String,
    pub generator_id: String,
    pub location: String,
    pub region: String,
    pub time_window: TimeWindow,
    pub volume: Decimal,
    pub status: CertificateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_bid: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bid: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auction_ends: Option<DateTime<Utc>>,
    pub effective_price: Decimal,
    pub carbon_intensity: Decimal,
    pub renewable_type: RenewableType,
    pub verification_badges: Vec<String>,
    pub nft_image: String,
}

impl From<&Certificate> for CertificateSummary {
    fn from(cert: &Certificate) -> Self {
        Self {
            id: cert.id.clone(),
            name: cert.display_name(),
            generator_name: cert.generator_name.clone(),
            generator_id: cert.generator_id.clone(),
            location: cert.location.clone(),
            region: cert.region_token().to_string(),
            time_window: cert.time_window,
            volume: cert.volume,
            status: cert.status(),
            price: cert.price(),
            current_bid: cert.current_bid(),
            min_bid: cert.listing.min_bid(),
            auction_ends: cert.auction_ends(),
            effective_price: cert.effective_price(),
            carbon_intensity: cert.carbon_intensity,
            renewable_type: cert.renewable_type,
            verification_badges: cert.verification_badges.clone(),
            nft_image: cert.nft_image.clone(),
        }
    }
}

/// Certificate detail page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDetail {
    #[serde(flatten)]
    pub summary: CertificateSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve: Option<Decimal>,
    pub attributes: BTreeMap<String, String>,
    pub slice_count: usize,
    pub sliced_energy_kwh: Decimal,
    pub activities: Vec<Activity>,
}

impl CatalogService {
    /// Create a new CatalogService instance
    pub fn new(store: Arc<CertificateStore>) -> Self {
        Self { store }
    }

    /// Run the marketplace query and return one page of cards
    pub fn list(
        &self,
        params: &CertificateListParams,
    ) -> AppResult<PaginatedResponse<CertificateSummary>> {
        let query = params.to_query()?;
        let results = self.store.query(&query);
        tracing::debug!(
            text = %query.text,
            sort = %query.sort,
            filters = query.criteria.active_filter_count(),
            matched = results.len(),
            "Catalog query"
        );

        Ok(PaginatedResponse::from_items(
            results.into_iter().map(CertificateSummary::from),
            params.pagination(),
        ))
    }

    pub fn facets(&self) -> CatalogFacets {
        self.store.facets()
    }

    fn find(&self, id: &str) -> AppResult<&Certificate> {
        self.store
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Certificate {}", id)))
    }

    pub fn get(&self, id: &str) -> AppResult<CertificateDetail> {
        let cert = self.find(id)?;
        Ok(CertificateDetail {
            summary: CertificateSummary::from(cert),
            reserve: cert.listing.reserve(),
            attributes: cert.attributes.clone(),
            slice_count: cert.slices.len(),
            sliced_energy_kwh: cert.sliced_energy_kwh(),
            activities: cert.activities.clone(),
        })
    }

    pub fn slices(&self, id: &str, pagination: Pagination) -> AppResult<PaginatedResponse<Slice>> {
        let cert = self.find(id)?;
        Ok(PaginatedResponse::from_items(
            cert.slices.iter().cloned(),
            pagination,
        ))
    }

    /// Certificate timeline, most recent first
    pub fn activity(&self, id: &str) -> AppResult<Vec<Activity>> {
        let cert = self.find(id)?;
        let mut activities = cert.activities.clone();
        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(activities)
    }
}
