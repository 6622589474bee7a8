//! Subcategory Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use uuid::Uuid;
use vend_app::domain::{
    listing::{PageRequest, SortOrder},
    subcategories::data::{SubcategoryFilter, SubcategorySortKey},
};

use crate::{
    extensions::*,
    pagination::ListResponse,
    state::State,
    subcategories::{errors::into_status_error, models::SubcategoryResponse},
};

/// Subcategory Index Handler
///
/// Returns a filtered page of subcategories, optionally scoped to one parent
/// category.
#[endpoint(tags("subcategories"), summary = "List Subcategories")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ListResponse<SubcategoryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = SubcategoryFilter {
        search: req.query("search"),
        category: req.query::<Uuid>("category").map(Into::into),
        sort_key: SubcategorySortKey::from_query(req.query::<String>("sortBy").as_deref()),
        sort_order: SortOrder::from_query(req.query::<String>("sortOrder").as_deref()),
    };

    let page = PageRequest::new(
        req.query("page"),
        req.query("limit"),
        PageRequest::DEFAULT_LIMIT,
    );

    let (subcategories, info) = state
        .app
        .subcategories
        .list_subcategories(filter, page)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ListResponse::new(
        subcategories.into_iter().map(Into::into).collect(),
        info,
    )))
}
