//! Common types used across the marketplace

use serde::{Deserialize, Serialize};

/// Largest page size a client may request
pub const MAX_PER_PAGE: u32 = 100;

/// Pagination parameters, 1-based
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 12,
        }
    }
}

impl Pagination {
    /// Build from optional query values, clamping to valid bounds
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        let default = Self::default();
        Self {
            page: page.unwrap_or(default.page).max(1),
            per_page: per_page
                .unwrap_or(default.per_page)
                .clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.per_page as usize
    }
}

/// Paginated response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Take one page out of an ordered result
    pub fn from_items<I>(items: I, pagination: Pagination) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let total_items = items.len() as u64;
        let data: Vec<T> = items
            .skip(pagination.offset())
            .take(pagination.per_page as usize)
            .collect();

        Self {
            data,
            pagination: PaginationMeta::new(pagination, total_items),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_more: bool,
}

impl PaginationMeta {
    pub fn new(pagination: Pagination, total_items: u64) -> Self {
        let per_page = u64::from(pagination.per_page.max(1));
        let total_pages = total_items.div_ceil(per_page) as u32;
        Self {
            page: pagination.page,
            per_page: pagination.per_page,
            total_items,
            total_pages,
            has_more: u64::from(pagination.page) < u64::from(total_pages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_clamps() {
        assert_eq!(Pagination::new(Some(0), Some(500)), Pagination { page: 1, per_page: 100 });
        assert_eq!(Pagination::new(None, None), Pagination::default());
    }

    #[test]
    fn test_page_slicing() {
        let page = PaginatedResponse::from_items(1..15, Pagination::new(Some(2), Some(6)));
        assert_eq!(page.data, vec![7, 8, 9, 10, 11, 12]);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_more);

        let last = PaginatedResponse::from_items(1..15, Pagination::new(Some(3), Some(6)));
        assert_eq!(last.data, vec![13, 14]);
        assert!(!last.pagination.has_more);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = PaginatedResponse::from_items(Vec::<u32>::new(), Pagination::default());
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
        assert!(!page.pagination.has_more);
    }
}
