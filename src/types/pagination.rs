//! Pagination types for list endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{DEFAULT_PAGE_NUMBER, PAGE_SIZE};
use crate::domain::{Department, EmployeeResponse};

/// A 1-based page of fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
}

impl PageRequest {
    /// Normalize a raw page number; missing, zero and negative pages
    /// become the first page.
    pub fn from_raw(page: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p as u64,
            _ => DEFAULT_PAGE_NUMBER,
        };
        Self { page }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1))
            .saturating_mul(PAGE_SIZE)
            .min(i64::MAX as u64)
    }

    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize, ToSchema)]
#[aliases(DepartmentPage = Paginated<Department>, EmployeePage = Paginated<EmployeeResponse>)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, request: PageRequest, total: u64) -> Self {
        let per_page = request.limit();
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            data,
            meta: PaginationMeta {
                page: request.page(),
                per_page,
                total,
                total_pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_follow_fixed_page_size() {
        assert_eq!(PageRequest::from_raw(Some(1)).offset(), 0);
        assert_eq!(PageRequest::from_raw(Some(2)).offset(), 5);
        assert_eq!(PageRequest::from_raw(Some(4)).offset(), 15);
        assert_eq!(PageRequest::from_raw(Some(4)).limit(), 5);
    }

    #[test]
    fn test_non_positive_pages_clamp_to_first() {
        assert_eq!(PageRequest::from_raw(Some(0)).page(), 1);
        assert_eq!(PageRequest::from_raw(Some(-7)).page(), 1);
        assert_eq!(PageRequest::from_raw(None).page(), 1);
        assert_eq!(PageRequest::from_raw(Some(-7)).offset(), 0);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let request = PageRequest::from_raw(Some(i64::MAX));
        assert_eq!(request.offset(), i64::MAX as u64);
    }

    #[test]
    fn test_meta_counts_pages() {
        let page: Paginated<u8> = Paginated::new(vec![6, 7], PageRequest::from_raw(Some(2)), 7);
        assert_eq!(page.meta.total_pages, 2);
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.meta.per_page, 5);

        let empty: Paginated<u8> = Paginated::new(vec![], PageRequest::default(), 0);
        assert_eq!(empty.meta.total_pages, 0);
    }
}
