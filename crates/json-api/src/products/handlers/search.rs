//! Product Search Handler

use std::sync::Arc;

use salvo::prelude::*;
use vend_app::domain::listing::PageRequest;

use crate::{
    extensions::*,
    pagination::ListResponse,
    products::{
        errors::into_status_error, handlers::index::filter_from_query, models::ProductResponse,
    },
    state::State,
};

/// Product Search Handler
///
/// Same listing as the index, but the search term arrives as `q` to match
/// the storefront search box.
#[endpoint(tags("products"), summary = "Search Products")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ListResponse<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let mut filter = filter_from_query(req);

    if let Some(q) = req.query::<String>("q") {
        filter.search = Some(q);
    }

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

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use vend_app::domain::{listing::PageInfo, products::MockProductsService};

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/search").get(handler))
    }

    #[tokio::test]
    async fn test_search_uses_q_parameter() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|filter, _page| filter.search.as_deref() == Some("laptop"))
            .return_once(|_, page| Ok((vec![], PageInfo::new(page, 0))));

        let res = TestClient::get("http://example.com/products/search?q=laptop")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
