//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vend_app::domain::products::data::NewProduct;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    #[serde(default)]
    pub stock: i32,
    pub category_uuid: Uuid,
    pub subcategory_uuid: Uuid,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub brand: Option<String>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            description: request.description,
            price_cents: request.price_cents,
            stock: request.stock,
            category_uuid: request.category_uuid.into(),
            subcategory_uuid: request.subcategory_uuid.into(),
            image_urls: request.image_urls,
            brand: request.brand,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    if request.name.trim().is_empty() {
        return Err(StatusError::bad_request().brief("Product name is required"));
    }

    if request.price_cents < 0 || request.stock < 0 {
        return Err(StatusError::bad_request().brief("Price and stock must not be negative"));
    }

    let product = state
        .app
        .products
        .create_product(request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/products/{}", product.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_uuid = %product.uuid, "created product");

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use vend_app::domain::{
        categories::records::CategoryUuid,
        products::{MockProductsService, ProductsServiceError},
        subcategories::records::SubcategoryUuid,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_returns_201() -> TestResult {
        let mut products = MockProductsService::new();
        let product = make_product("X1 Laptop");
        let uuid = product.uuid;

        products
            .expect_create_product()
            .once()
            .withf(|new| new.name == "X1 Laptop" && new.price_cents == 19_900 && new.stock == 5)
            .return_once(move |_| Ok(product));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "name": "X1 Laptop",
                "price_cents": 19_900,
                "stock": 5,
                "category_uuid": CategoryUuid::new(),
                "subcategory_uuid": SubcategoryUuid::new(),
            }))
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/api/products/{uuid}").as_str()));
        assert_eq!(body.name, "X1 Laptop");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_negative_price_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/products")
            .json(&json!({
                "name": "X1 Laptop",
                "price_cents": -1,
                "category_uuid": CategoryUuid::new(),
                "subcategory_uuid": SubcategoryUuid::new(),
            }))
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_unknown_subcategory_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({
                "name": "X1 Laptop",
                "price_cents": 19_900,
                "category_uuid": CategoryUuid::new(),
                "subcategory_uuid": SubcategoryUuid::new(),
            }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
