//! The marketplace query pipeline

use serde::{Deserialize, Serialize};

use super::{compare, matches, FilterCriteria, SortKey};
use crate::models::Certificate;

/// Filter `store` with `criteria` and `text`, then stable-sort by `sort_key`.
///
/// Returns references into `store` in display order. Inputs are not modified.
pub fn query<'a>(
    store: &'a [Certificate],
    criteria: &FilterCriteria,
    text: &str,
    sort_key: SortKey,
) -> Vec<&'a Certificate> {
    let mut results: Vec<&Certificate> = store
        .iter()
        .filter(|cert| matches(cert, criteria, text))
        .collect();

    // `sort_by` is stable
    results.sort_by(|a, b| compare(a, b, sort_key));
    results
}

/// All inputs of one marketplace query
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogQuery {
    pub criteria: FilterCriteria,
    pub text: String,
    pub sort: SortKey,
}

impl CatalogQuery {
    pub fn run<'a>(&self, store: &'a [Certificate]) -> Vec<&'a Certificate> {
        query(store, &self.criteria, &self.text, self.sort)
    }
}
