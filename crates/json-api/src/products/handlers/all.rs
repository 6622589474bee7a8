//! All Products Handler

use std::sync::Arc;

use salvo::prelude::*;
use vend_app::domain::{
    listing::{MAX_PAGE_LIMIT, PageRequest, SortOrder},
    products::data::{ProductFilter, ProductSort, ProductSortKey},
};

use crate::{
    extensions::*,
    pagination::ListResponse,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// All Products Handler
///
/// Unfiltered name-ordered listing for admin pickers, at the page-size
/// ceiling. Callers page through it with `page` when the catalog outgrows
/// one page.
#[endpoint(tags("products"), summary = "All Products")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ListResponse<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ProductFilter {
        sort: ProductSort {
            key: ProductSortKey::Name,
            order: SortOrder::Asc,
        },
        ..ProductFilter::default()
    };

    let page = PageRequest::new(req.query("page"), Some(MAX_PAGE_LIMIT), MAX_PAGE_LIMIT);

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

    use vend_app::domain::{
        listing::{PageInfo, SortOrder},
        products::MockProductsService,
    };

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/all").get(handler))
    }

    #[tokio::test]
    async fn test_all_lists_by_name_at_max_page_size() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|filter, page| {
                filter.sort.key == ProductSortKey::Name
                    && filter.sort.order == SortOrder::Asc
                    && page.limit() == MAX_PAGE_LIMIT
            })
            .return_once(|_, page| Ok((vec![], PageInfo::new(page, 0))));

        let res = TestClient::get("http://example.com/products/all")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
