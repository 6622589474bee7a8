//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vend_app::domain::products::data::ProductUpdate;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Update Product Request
///
/// Omitted fields are left unchanged.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i32>,
    pub category_uuid: Option<Uuid>,
    pub subcategory_uuid: Option<Uuid>,
    pub image_urls: Option<Vec<String>>,
    pub brand: Option<String>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            description: request.description,
            price_cents: request.price_cents,
            stock: request.stock,
            category_uuid: request.category_uuid.map(Into::into),
            subcategory_uuid: request.subcategory_uuid.map(Into::into),
            image_urls: request.image_urls,
            brand: request.brand,
        }
    }
}

/// Update Product Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let uuid = uuid.into_inner();

    if request.price_cents.is_some_and(|price| price < 0)
        || request.stock.is_some_and(|stock| stock < 0)
    {
        return Err(StatusError::bad_request().brief("Price and stock must not be negative"));
    }

    let product = state
        .app
        .products
        .update_product(uuid.into(), request.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_uuid = %uuid, "updated product");

    Ok(Json(product.into()))
}
