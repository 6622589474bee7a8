//! Shared list-endpoint building blocks: page requests, page descriptors and
//! sort directions.
//!
//! Query parameters are normalised here, at the boundary, instead of being
//! patched into ad hoc query objects further down.

use serde::{Deserialize, Serialize};

/// Hard ceiling on page size for every list endpoint.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// A normalised pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Default page size for most list endpoints.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Default page size for product listings.
    pub const PRODUCT_LIMIT: u32 = 12;

    /// Build a page request, clamping out-of-range values: `page` is at least
    /// 1 and `limit` lands in `1..=MAX_PAGE_LIMIT`.
    #[must_use]
    pub fn new(page: Option<u32>, limit: Option<u32>, default_limit: u32) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(default_limit).clamp(1, MAX_PAGE_LIMIT),
        }
    }

    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }

    /// Row offset for `OFFSET`/`LIMIT` queries.
    #[must_use]
    pub const fn offset(self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, Self::DEFAULT_LIMIT)
    }
}

/// Pagination descriptor returned alongside every list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl PageInfo {
    #[must_use]
    pub fn new(request: PageRequest, total: u64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total.div_ceil(u64::from(request.limit)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Parse the `sortOrder` query value; anything other than `asc` sorts
    /// descending, matching the storefront's behaviour.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }
}
