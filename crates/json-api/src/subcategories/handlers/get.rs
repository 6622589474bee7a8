//! Get Subcategory Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    subcategories::{errors::into_status_error, models::SubcategoryResponse},
};

/// Get Subcategory Handler
#[endpoint(tags("subcategories"), summary = "Get Subcategory")]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<SubcategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let subcategory = state
        .app
        .subcategories
        .get_subcategory(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(subcategory.into()))
}
