//! Pagination utilities for list endpoints.
//!
//! List endpoints accept `?page=N&limit=M`. Missing or empty values fall back
//! to page 1 and a limit of 10; the limit is clamped to `1..=100`.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub has_more: bool,
}

impl PaginationMeta {
    pub fn new(params: &PaginationParams, total: i64) -> Self {
        let limit = params.limit();
        let offset = params.offset();
        Self {
            total,
            page: params.page(),
            limit,
            has_more: offset.saturating_add(limit) < total,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number, starting at 1
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    /// Items per page (1-100)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Saturates instead of overflowing for absurd page numbers; such pages
    /// are simply empty.
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_offset_from_page() {
        let params = PaginationParams {
            page: Some(3),
            limit: Some(20),
        };
        assert_eq!(params.offset(), 40);
    }

    #[test]
    fn test_limit_is_clamped() {
        let low = PaginationParams {
            page: None,
            limit: Some(0),
        };
        let high = PaginationParams {
            page: None,
            limit: Some(500),
        };
        assert_eq!(low.limit(), 1);
        assert_eq!(high.limit(), 100);
    }

    #[test]
    fn test_non_positive_page_becomes_first_page() {
        let params = PaginationParams {
            page: Some(-2),
            limit: None,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_empty_query_values_use_defaults() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"page":"","limit":""}"#).unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn test_meta_has_more() {
        let params = PaginationParams {
            page: Some(1),
            limit: Some(10),
        };
        assert!(PaginationMeta::new(&params, 25).has_more);

        let last = PaginationParams {
            page: Some(3),
            limit: Some(10),
        };
        let meta = PaginationMeta::new(&last, 25);
        assert!(!meta.has_more);
        assert_eq!(meta.page, 3);
        assert_eq!(meta.total, 25);
    }

    #[test]
    fn test_huge_page_saturates() {
        let params = PaginationParams {
            page: Some(i64::MAX),
            limit: Some(MAX_LIMIT),
        };
        assert_eq!(params.offset(), i64::MAX);

        let meta = PaginationMeta::new(&params, 25);
        assert_eq!(meta.page, i64::MAX);
        assert!(!meta.has_more);
    }
}
