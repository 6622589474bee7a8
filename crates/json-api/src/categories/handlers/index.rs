//! Category Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use vend_app::domain::{
    categories::data::{CategoryFilter, CategorySortKey},
    listing::{PageRequest, SortOrder},
};

use crate::{
    categories::{errors::into_status_error, models::CategoryResponse},
    extensions::*,
    pagination::ListResponse,
    state::State,
};

/// Category Index Handler
///
/// Returns a filtered page of categories.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ListResponse<CategoryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = CategoryFilter {
        search: req.query("search"),
        sort_key: CategorySortKey::from_query(req.query::<String>("sortBy").as_deref()),
        sort_order: SortOrder::from_query(req.query::<String>("sortOrder").as_deref()),
    };

    let page = PageRequest::new(
        req.query("page"),
        req.query("limit"),
        PageRequest::DEFAULT_LIMIT,
    );

    let (categories, info) = state
        .app
        .categories
        .list_categories(filter, page)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ListResponse::new(
        categories.into_iter().map(Into::into).collect(),
        info,
    )))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vend_app::domain::{
        categories::{CategoriesServiceError, MockCategoriesService},
        listing::PageInfo,
    };

    use crate::test_helpers::{categories_service, make_category};

    use super::*;

    fn make_service(categories: MockCategoriesService) -> Service {
        categories_service(categories, Router::with_path("categories").get(handler))
    }

    #[tokio::test]
    async fn test_index_wraps_page_in_envelope() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_list_categories()
            .once()
            .withf(|filter, page| filter.search.is_none() && page.limit() == 10)
            .return_once(|_, page| {
                Ok((
                    vec![make_category("Electronics"), make_category("Apparel")],
                    PageInfo::new(page, 2),
                ))
            });

        let response: ListResponse<CategoryResponse> =
            TestClient::get("http://example.com/categories")
                .send(&make_service(categories))
                .await
                .take_json()
                .await?;

        assert!(response.success);
        assert_eq!(response.count, 2);
        assert_eq!(response.pagination.total, 2);
        assert_eq!(response.pagination.total_pages, 1);
        assert_eq!(response.data[0].name, "Electronics");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_search_and_sort() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_list_categories()
            .once()
            .withf(|filter, _page| {
                filter.search.as_deref() == Some("elec")
                    && filter.sort_key == CategorySortKey::Name
                    && filter.sort_order == SortOrder::Asc
            })
            .return_once(|_, page| Ok((vec![], PageInfo::new(page, 0))));

        let res =
            TestClient::get("http://example.com/categories?search=elec&sortBy=name&sortOrder=asc")
                .send(&make_service(categories))
                .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_invalid_payload_error_returns_400() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_list_categories()
            .once()
            .return_once(|_, _| Err(CategoriesServiceError::InvalidData));

        let res = TestClient::get("http://example.com/categories")
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
