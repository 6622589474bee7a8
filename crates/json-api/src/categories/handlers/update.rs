//! Update Category Handler

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

use vend_app::domain::categories::data::CategoryUpdate;

use crate::{
    categories::{errors::into_status_error, models::CategoryResponse},
    extensions::*,
    state::State,
};

/// Update Category Request
///
/// Omitted fields are left unchanged.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<UpdateCategoryRequest> for CategoryUpdate {
    fn from(request: UpdateCategoryRequest) -> Self {
        CategoryUpdate {
            name: request.name,
            description: request.description,
            image_url: request.image_url,
        }
    }
}

/// Update Category Handler
#[endpoint(
    tags("categories"),
    summary = "Update Category",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Category updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateCategoryRequest>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let uuid = uuid.into_inner();

    let category = state
        .app
        .categories
        .update_category(uuid.into(), request.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(category_uuid = %uuid, "updated category");

    Ok(Json(category.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use vend_app::domain::categories::{
        CategoriesServiceError, MockCategoriesService, records::CategoryUuid,
    };

    use crate::test_helpers::{categories_service, make_category};

    use super::*;

    fn make_service(categories: MockCategoriesService) -> Service {
        categories_service(categories, Router::with_path("categories/{uuid}").put(handler))
    }

    #[tokio::test]
    async fn test_update_category_success() -> TestResult {
        let mut categories = MockCategoriesService::new();
        let mut category = make_category("Electronics");

        category.name = "Gadgets".to_owned();

        let uuid = category.uuid;

        categories
            .expect_update_category()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && update.name.as_deref() == Some("Gadgets")
                    && update.description.is_none()
            })
            .return_once(move |_, _| Ok(category));

        let mut res = TestClient::put(format!("http://example.com/categories/{uuid}"))
            .json(&json!({ "name": "Gadgets" }))
            .send(&make_service(categories))
            .await;

        let body: CategoryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Gadgets");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_category_returns_404() -> TestResult {
        let mut categories = MockCategoriesService::new();
        let uuid = CategoryUuid::new();

        categories
            .expect_update_category()
            .once()
            .return_once(|_, _| Err(CategoriesServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/categories/{uuid}"))
            .json(&json!({ "name": "Gadgets" }))
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_category_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::put("http://example.com/categories/123")
            .json(&json!({ "name": "Gadgets" }))
            .send(&make_service(MockCategoriesService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
