//! List query parameters: search text, sort key and page.
//!
//! Each listable resource declares its own sort vocabulary through
//! [`SortKey`]. Unknown tokens are not an error; they simply leave the
//! result in the store's natural order.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::types::PageRequest;

/// Direction a sort key orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A fixed vocabulary of sort tokens for one resource.
pub trait SortKey: Copy + Sized {
    /// Recognize a token. Matching is exact and case-sensitive.
    fn parse(token: &str) -> Option<Self>;

    fn direction(self) -> SortDirection {
        SortDirection::Ascending
    }
}

/// Department list ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentSort {
    Name,
    Location,
}

impl SortKey for DepartmentSort {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "name" => Some(Self::Name),
            "location" => Some(Self::Location),
            _ => None,
        }
    }
}

/// Employee list ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeSort {
    /// By first name
    Name,
    /// Most recently hired first
    HireDate,
}

impl SortKey for EmployeeSort {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "name" => Some(Self::Name),
            "hireDate" => Some(Self::HireDate),
            _ => None,
        }
    }

    fn direction(self) -> SortDirection {
        match self {
            Self::Name => SortDirection::Ascending,
            Self::HireDate => SortDirection::Descending,
        }
    }
}

/// Query string accepted by every list endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Substring to look for in the resource's searchable fields
    pub search: Option<String>,
    /// Sort token, e.g. `name`
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
    /// 1-based page number; values below 1 are treated as 1
    pub page: Option<i64>,
}

impl ListQuery {
    pub fn new(search: Option<&str>, sort_order: Option<&str>, page: i64) -> Self {
        Self {
            search: search.map(str::to_string),
            sort_order: sort_order.map(str::to_string),
            page: Some(page),
        }
    }

    /// Search text, or `None` when the filter should not apply.
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    pub fn sort_key<K: SortKey>(&self) -> Option<K> {
        self.sort_order.as_deref().and_then(K::parse)
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_means_no_filter() {
        assert_eq!(ListQuery::new(Some(""), None, 1).search_text(), None);
        assert_eq!(ListQuery::default().search_text(), None);
        assert_eq!(
            ListQuery::new(Some("Sales"), None, 1).search_text(),
            Some("Sales")
        );
    }

    #[test]
    fn test_department_sort_vocabulary() {
        let q = ListQuery::new(None, Some("location"), 1);
        assert_eq!(q.sort_key::<DepartmentSort>(), Some(DepartmentSort::Location));
        assert_eq!(
            ListQuery::new(None, Some("hireDate"), 1).sort_key::<DepartmentSort>(),
            None
        );
        assert_eq!(DepartmentSort::Name.direction(), SortDirection::Ascending);
    }

    #[test]
    fn test_employee_hire_date_descends() {
        let key = ListQuery::new(None, Some("hireDate"), 1)
            .sort_key::<EmployeeSort>()
            .unwrap();
        assert_eq!(key, EmployeeSort::HireDate);
        assert_eq!(key.direction(), SortDirection::Descending);
        assert_eq!(EmployeeSort::Name.direction(), SortDirection::Ascending);
    }

    #[test]
    fn test_sort_tokens_are_case_sensitive() {
        assert_eq!(EmployeeSort::parse("hiredate"), None);
        assert_eq!(DepartmentSort::parse("Name"), None);
        assert_eq!(DepartmentSort::parse(""), None);
    }

    #[test]
    fn test_query_string_names() {
        let q: ListQuery =
            serde_json::from_str(r#"{"search":"Ann","sortOrder":"name","page":3}"#).unwrap();
        assert_eq!(q.search_text(), Some("Ann"));
        assert_eq!(q.sort_key::<EmployeeSort>(), Some(EmployeeSort::Name));
        assert_eq!(q.page_request().page(), 3);
    }
}
