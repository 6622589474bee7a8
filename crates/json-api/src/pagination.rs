//! Shared list-response envelope.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use vend_app::domain::listing::PageInfo;

/// Pagination descriptor mirrored into every list response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub(crate) struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl From<PageInfo> for Pagination {
    fn from(info: PageInfo) -> Self {
        Self {
            page: info.page,
            limit: info.limit,
            total: info.total,
            total_pages: info.total_pages,
        }
    }
}

/// Standard list envelope: `{ success, count, pagination, data }`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ListResponse<T: ToSchema + 'static> {
    pub success: bool,
    pub count: usize,
    pub pagination: Pagination,
    pub data: Vec<T>,
}

impl<T: ToSchema + 'static> ListResponse<T> {
    pub(crate) fn new(data: Vec<T>, info: PageInfo) -> Self {
        Self {
            success: true,
            count: data.len(),
            pagination: info.into(),
            data,
        }
    }
}
