//! Products Data

use crate::domain::{
    categories::records::CategoryUuid,
    listing::SortOrder,
    subcategories::records::SubcategoryUuid,
};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub stock: i32,
    pub category_uuid: CategoryUuid,
    pub subcategory_uuid: SubcategoryUuid,
    pub image_urls: Vec<String>,
    pub brand: Option<String>,
}

/// Product Update Data
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i32>,
    pub category_uuid: Option<CategoryUuid>,
    pub subcategory_uuid: Option<SubcategoryUuid>,
    pub image_urls: Option<Vec<String>>,
    pub brand: Option<String>,
}

/// Recognised product sort columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSortKey {
    Price,
    Rating,
    Name,
    #[default]
    CreatedAt,
}

impl ProductSortKey {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Price => "p.price_cents",
            Self::Rating => "p.rating",
            Self::Name => "p.name",
            Self::CreatedAt => "p.created_at",
        }
    }
}

/// A fully resolved product sort specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductSort {
    pub key: ProductSortKey,
    pub order: SortOrder,
}

impl ProductSort {
    /// Resolve the three sorting query parameters the storefront and admin
    /// UIs send. Explicit `sortBy`/`sortOrder` win; otherwise the combined
    /// `sort` strings (`price-asc`, `price-desc`, `newest`, `oldest`) are
    /// honoured; anything else sorts newest first.
    #[must_use]
    pub fn from_query(
        sort: Option<&str>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Self {
        if let Some(sort_by) = sort_by {
            let key = match sort_by {
                "price" => ProductSortKey::Price,
                "rating" => ProductSortKey::Rating,
                "name" => ProductSortKey::Name,
                _ => ProductSortKey::CreatedAt,
            };

            return Self {
                key,
                order: SortOrder::from_query(sort_order),
            };
        }

        match sort {
            Some("price-asc") => Self {
                key: ProductSortKey::Price,
                order: SortOrder::Asc,
            },
            Some("price-desc") => Self {
                key: ProductSortKey::Price,
                order: SortOrder::Desc,
            },
            Some("oldest") => Self {
                key: ProductSortKey::CreatedAt,
                order: SortOrder::Asc,
            },
            // "newest" and anything unrecognised
            _ => Self::default(),
        }
    }
}

/// Product listing filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring match on name, description or brand.
    pub search: Option<String>,
    pub category: Option<CategoryUuid>,
    pub subcategory: Option<SubcategoryUuid>,
    pub min_price_cents: Option<i64>,
    pub max_price_cents: Option<i64>,
    pub brand: Option<String>,
    pub sort: ProductSort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_sort_by_wins_over_combined_sort() {
        let sort = ProductSort::from_query(Some("price-desc"), Some("rating"), Some("asc"));

        assert_eq!(sort.key, ProductSortKey::Rating);
        assert_eq!(sort.order, SortOrder::Asc);
    }

    #[test]
    fn combined_sort_strings_resolve() {
        assert_eq!(
            ProductSort::from_query(Some("price-asc"), None, None),
            ProductSort {
                key: ProductSortKey::Price,
                order: SortOrder::Asc,
            }
        );
        assert_eq!(
            ProductSort::from_query(Some("oldest"), None, None),
            ProductSort {
                key: ProductSortKey::CreatedAt,
                order: SortOrder::Asc,
            }
        );
    }

    #[test]
    fn unrecognised_sort_defaults_to_newest() {
        let sort = ProductSort::from_query(Some("bogus"), None, None);

        assert_eq!(sort.key, ProductSortKey::CreatedAt);
        assert_eq!(sort.order, SortOrder::Desc);
    }
}
