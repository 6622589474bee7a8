//! Subcategories Data

use crate::domain::{
    categories::records::CategoryUuid,
    listing::SortOrder,
};

/// New Subcategory Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubcategory {
    pub name: String,
    pub description: String,
    pub category_uuid: CategoryUuid,
    pub image_url: Option<String>,
}

/// Subcategory Update Data
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubcategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_uuid: Option<CategoryUuid>,
    pub image_url: Option<String>,
}

/// Recognised subcategory sort columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubcategorySortKey {
    Name,
    #[default]
    CreatedAt,
}

impl SubcategorySortKey {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Name => "s.name",
            Self::CreatedAt => "s.created_at",
        }
    }

    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("name") => Self::Name,
            _ => Self::CreatedAt,
        }
    }
}

/// Subcategory listing filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubcategoryFilter {
    /// Case-insensitive substring match on name or description.
    pub search: Option<String>,
    /// Restrict to a single owning category.
    pub category: Option<CategoryUuid>,
    pub sort_key: SubcategorySortKey,
    pub sort_order: SortOrder,
}
