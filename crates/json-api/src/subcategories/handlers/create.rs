//! Create Subcategory Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vend_app::domain::subcategories::data::NewSubcategory;

use crate::{
    extensions::*,
    state::State,
    subcategories::{errors::into_status_error, models::SubcategoryResponse},
};

/// Create Subcategory Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateSubcategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_uuid: Uuid,
    pub image_url: Option<String>,
}

impl From<CreateSubcategoryRequest> for NewSubcategory {
    fn from(request: CreateSubcategoryRequest) -> Self {
        NewSubcategory {
            name: request.name,
            description: request.description,
            category_uuid: request.category_uuid.into(),
            image_url: request.image_url,
        }
    }
}

/// Create Subcategory Handler
#[endpoint(
    tags("subcategories"),
    summary = "Create Subcategory",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Subcategory created"),
        (status_code = StatusCode::CONFLICT, description = "Subcategory already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateSubcategoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SubcategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    if request.name.trim().is_empty() {
        return Err(StatusError::bad_request().brief("Subcategory name is required"));
    }

    let subcategory = state
        .app
        .subcategories
        .create_subcategory(request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/api/subcategories/{}", subcategory.uuid),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    tracing::info!(subcategory_uuid = %subcategory.uuid, "created subcategory");

    Ok(Json(subcategory.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use vend_app::domain::{
        categories::records::CategoryUuid,
        subcategories::{MockSubcategoriesService, SubcategoriesServiceError},
    };

    use crate::test_helpers::{make_subcategory, subcategories_service};

    use super::*;

    fn make_service(subcategories: MockSubcategoriesService) -> Service {
        subcategories_service(subcategories, Router::with_path("subcategories").post(handler))
    }

    #[tokio::test]
    async fn test_create_subcategory_returns_201() -> TestResult {
        let mut subcategories = MockSubcategoriesService::new();
        let subcategory = make_subcategory("Laptops");
        let category = subcategory.category_uuid;

        subcategories
            .expect_create_subcategory()
            .once()
            .withf(move |new| new.name == "Laptops" && new.category_uuid == category)
            .return_once(move |_| Ok(subcategory));

        let res = TestClient::post("http://example.com/subcategories")
            .json(&json!({ "name": "Laptops", "category_uuid": category }))
            .send(&make_service(subcategories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_subcategory_missing_category_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/subcategories")
            .json(&json!({ "name": "Laptops" }))
            .send(&make_service(MockSubcategoriesService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_subcategory_unknown_category_returns_400() -> TestResult {
        let mut subcategories = MockSubcategoriesService::new();

        subcategories
            .expect_create_subcategory()
            .once()
            .return_once(|_| Err(SubcategoriesServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/subcategories")
            .json(&json!({ "name": "Laptops", "category_uuid": CategoryUuid::new() }))
            .send(&make_service(subcategories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
