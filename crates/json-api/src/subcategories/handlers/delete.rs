//! Delete Subcategory Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State, subcategories::errors::into_status_error};

/// Delete Subcategory Handler
///
/// Soft-deletes by clearing the active flag.
#[endpoint(
    tags("subcategories"),
    summary = "Delete Subcategory",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Subcategory deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Subcategory not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let uuid = uuid.into_inner();

    state
        .app
        .subcategories
        .delete_subcategory(uuid.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(subcategory_uuid = %uuid, "deleted subcategory");

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use vend_app::domain::subcategories::{
        MockSubcategoriesService, SubcategoriesServiceError, records::SubcategoryUuid,
    };

    use crate::test_helpers::subcategories_service;

    use super::*;

    fn make_service(subcategories: MockSubcategoriesService) -> Service {
        subcategories_service(
            subcategories,
            Router::with_path("subcategories/{uuid}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_subcategory_success() -> TestResult {
        let mut subcategories = MockSubcategoriesService::new();
        let uuid = SubcategoryUuid::new();

        subcategories
            .expect_delete_subcategory()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/subcategories/{uuid}"))
            .send(&make_service(subcategories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_subcategory_returns_404() -> TestResult {
        let mut subcategories = MockSubcategoriesService::new();
        let uuid = SubcategoryUuid::new();

        subcategories
            .expect_delete_subcategory()
            .once()
            .return_once(|_| Err(SubcategoriesServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/subcategories/{uuid}"))
            .send(&make_service(subcategories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
