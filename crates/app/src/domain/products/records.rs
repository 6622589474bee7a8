//! Product Records

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Row, postgres::PgRow};

use crate::{
    domain::{categories::records::CategoryUuid, subcategories::records::SubcategoryUuid},
    uuids::TypedUuid,
};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Unit price in minor currency units; never negative.
    pub price_cents: i64,
    pub stock: i32,
    /// Always `stock > 0`; recomputed on every stock mutation.
    pub in_stock: bool,
    pub category_uuid: CategoryUuid,
    pub category_name: String,
    pub subcategory_uuid: SubcategoryUuid,
    pub subcategory_name: String,
    pub image_urls: Vec<String>,
    pub brand: Option<String>,
    /// Average review rating, 0 to 5.
    pub rating: f64,
    pub num_reviews: i32,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            description: row.try_get("description")?,
            price_cents: row.try_get("price_cents")?,
            stock: row.try_get("stock")?,
            in_stock: row.try_get("in_stock")?,
            category_uuid: CategoryUuid::from_uuid(row.try_get("category_uuid")?),
            category_name: row.try_get("category_name")?,
            subcategory_uuid: SubcategoryUuid::from_uuid(row.try_get("subcategory_uuid")?),
            subcategory_name: row.try_get("subcategory_name")?,
            image_urls: row.try_get("image_urls")?,
            brand: row.try_get("brand")?,
            rating: row.try_get("rating")?,
            num_reviews: row.try_get("num_reviews")?,
            active: row.try_get("active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

/// Narrow stock view returned by the order-placement decrement.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStock {
    pub uuid: ProductUuid,
    pub name: String,
    pub stock: i32,
    pub in_stock: bool,
}

impl ProductStock {
    /// Whether this product should raise a restock alert.
    #[must_use]
    pub const fn is_low(&self) -> bool {
        self.stock < super::LOW_STOCK_THRESHOLD
    }
}

impl<'r> FromRow<'r, PgRow> for ProductStock {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            stock: row.try_get("stock")?,
            in_stock: row.try_get("in_stock")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(level: i32) -> ProductStock {
        ProductStock {
            uuid: ProductUuid::new(),
            name: "X1".to_string(),
            stock: level,
            in_stock: level > 0,
        }
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        assert!(stock(9).is_low());
        assert!(stock(0).is_low());
        assert!(!stock(10).is_low());
        assert!(!stock(250).is_low());
    }
}
