//! Categories Data

use crate::domain::listing::SortOrder;

/// New Category Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// Category Update Data
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Recognised category sort columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySortKey {
    Name,
    #[default]
    CreatedAt,
}

impl CategorySortKey {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Name => "c.name",
            Self::CreatedAt => "c.created_at",
        }
    }

    /// Parse the `sortBy` query value; unrecognised columns fall back to
    /// creation time.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("name") => Self::Name,
            _ => Self::CreatedAt,
        }
    }
}

/// Category listing filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryFilter {
    /// Case-insensitive substring match on name or description.
    pub search: Option<String>,
    pub sort_key: CategorySortKey,
    pub sort_order: SortOrder,
}
