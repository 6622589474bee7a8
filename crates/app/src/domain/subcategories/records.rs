//! Subcategory Records

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Row, postgres::PgRow};

use crate::{domain::categories::records::CategoryUuid, uuids::TypedUuid};

/// Subcategory UUID
pub type SubcategoryUuid = TypedUuid<SubcategoryRecord>;

/// Subcategory Record
///
/// Every subcategory belongs to exactly one category.
#[derive(Debug, Clone)]
pub struct SubcategoryRecord {
    pub uuid: SubcategoryUuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category_uuid: CategoryUuid,
    /// Display name of the owning category, resolved at query time.
    pub category_name: String,
    pub image_url: Option<String>,
    pub active: bool,
    /// Active products under this subcategory, for listing displays.
    pub product_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<'r> FromRow<'r, PgRow> for SubcategoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: SubcategoryUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            description: row.try_get("description")?,
            category_uuid: CategoryUuid::from_uuid(row.try_get("category_uuid")?),
            category_name: row.try_get("category_name")?,
            image_url: row.try_get("image_url")?,
            active: row.try_get("active")?,
            product_count: row.try_get("product_count")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
