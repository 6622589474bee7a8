//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use uuid::Uuid;
use vend_app::domain::{
    listing::PageRequest,
    products::data::{ProductFilter, ProductSort},
};

use crate::{
    extensions::*,
    pagination::ListResponse,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

pub(crate) fn filter_from_query(req: &mut Request) -> ProductFilter {
    ProductFilter {
        search: req.query("search"),
        category: req.query::<Uuid>("category").map(Into::into),
        subcategory: req.query::<Uuid>("subcategory").map(Into::into),
        min_price_cents: req.query("minPrice"),
        max_price_cents: req.query("maxPrice"),
        brand: req.query("brand"),
        sort: ProductSort::from_query(
            req.query::<String>("sort").as_deref(),
            req.query::<String>("sortBy").as_deref(),
            req.query::<String>("sortOrder").as_deref(),
        ),
    }
}

/// Product Index Handler
///
/// Returns a filtered page of products; storefront listings default to
/// twelve per page.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ListResponse<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = filter_from_query(req);

    let page = PageRequest::new(
        req.query("page"),
        req.query("limit"),
        PageRequest::PRODUCT_LIMIT,
    );

    let (products, info) = state
        .app
        .products
        .list_products(filter, page)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ListResponse::new(
        products.into_iter().map(Into::into).collect(),
        info,
    )))
}
