//! Subcategory API models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vend_app::domain::subcategories::records::SubcategoryRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubcategoryResponse {
    pub uuid: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category_uuid: Uuid,
    pub category_name: String,
    pub image_url: Option<String>,
    pub active: bool,
    /// Number of active products under this subcategory.
    pub product_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SubcategoryRecord> for SubcategoryResponse {
    fn from(subcategory: SubcategoryRecord) -> Self {
        Self {
            uuid: subcategory.uuid.into(),
            name: subcategory.name,
            slug: subcategory.slug,
            description: subcategory.description,
            category_uuid: subcategory.category_uuid.into(),
            category_name: subcategory.category_name,
            image_url: subcategory.image_url,
            active: subcategory.active,
            product_count: subcategory.product_count,
            created_at: subcategory.created_at.to_string(),
            updated_at: subcategory.updated_at.to_string(),
        }
    }
}
