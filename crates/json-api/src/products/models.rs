//! Product API models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vend_app::domain::products::records::ProductRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub uuid: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Unit price in minor currency units.
    pub price_cents: i64,
    pub stock: i32,
    pub in_stock: bool,
    pub category_uuid: Uuid,
    pub category_name: String,
    pub subcategory_uuid: Uuid,
    pub subcategory_name: String,
    pub image_urls: Vec<String>,
    pub brand: Option<String>,
    pub rating: f64,
    pub num_reviews: i32,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            uuid: product.uuid.into(),
            name: product.name,
            slug: product.slug,
            description: product.description,
            price_cents: product.price_cents,
            stock: product.stock,
            in_stock: product.in_stock,
            category_uuid: product.category_uuid.into(),
            category_name: product.category_name,
            subcategory_uuid: product.subcategory_uuid.into(),
            subcategory_name: product.subcategory_name,
            image_urls: product.image_urls,
            brand: product.brand,
            rating: product.rating,
            num_reviews: product.num_reviews,
            active: product.active,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}
