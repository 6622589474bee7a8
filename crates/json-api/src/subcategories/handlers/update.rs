//! Update Subcategory Handler

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

use vend_app::domain::subcategories::data::SubcategoryUpdate;

use crate::{
    extensions::*,
    state::State,
    subcategories::{errors::into_status_error, models::SubcategoryResponse},
};

/// Update Subcategory Request
///
/// Omitted fields are left unchanged; `category_uuid` moves the subcategory
/// to a different parent.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateSubcategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_uuid: Option<Uuid>,
    pub image_url: Option<String>,
}

impl From<UpdateSubcategoryRequest> for SubcategoryUpdate {
    fn from(request: UpdateSubcategoryRequest) -> Self {
        SubcategoryUpdate {
            name: request.name,
            description: request.description,
            category_uuid: request.category_uuid.map(Into::into),
            image_url: request.image_url,
        }
    }
}

/// Update Subcategory Handler
#[endpoint(
    tags("subcategories"),
    summary = "Update Subcategory",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Subcategory updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Subcategory not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateSubcategoryRequest>,
    depot: &mut Depot,
) -> Result<Json<SubcategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let uuid = uuid.into_inner();

    let subcategory = state
        .app
        .subcategories
        .update_subcategory(uuid.into(), request.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(subcategory_uuid = %uuid, "updated subcategory");

    Ok(Json(subcategory.into()))
}
