//! Place Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vend_app::domain::orders::{
    data::{NewOrder, NewOrderItem},
    records::{Address, CustomerSnapshot, PaymentInfo, PaymentMethod, PaymentStatus},
};

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        models::{EmailStatusResponse, OrderResponse},
    },
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemRequest {
    pub product_uuid: Uuid,
    pub name: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub image_url: Option<String>,
}

impl From<OrderItemRequest> for NewOrderItem {
    fn from(item: OrderItemRequest) -> Self {
        NewOrderItem {
            product_uuid: item.product_uuid.into(),
            name: item.name,
            price_cents: item.price_cents,
            quantity: item.quantity,
            image_url: item.image_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressRequest {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: AddressRequest,
}

/// Payment details; unknown method or status strings fall back to
/// cash-on-delivery / pending.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentRequest {
    pub method: Option<String>,
    pub status: Option<String>,
    pub reference: Option<String>,
}

/// Place Order Request
///
/// Totals are client-supplied snapshots and stored as-is.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PlaceOrderRequest {
    pub customer: CustomerRequest,
    pub items: Vec<OrderItemRequest>,
    pub items_cents: i64,
    #[serde(default)]
    pub tax_cents: i64,
    #[serde(default)]
    pub shipping_cents: i64,
    pub total_cents: i64,
    #[serde(default)]
    pub payment: PaymentRequest,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub is_delivered: bool,
    pub notes: Option<String>,
}

impl From<PlaceOrderRequest> for NewOrder {
    fn from(request: PlaceOrderRequest) -> Self {
        NewOrder {
            customer: CustomerSnapshot {
                name: request.customer.name,
                email: request.customer.email,
                phone: request.customer.phone,
                address: Address {
                    street: request.customer.address.street,
                    city: request.customer.address.city,
                    state: request.customer.address.state,
                    country: request.customer.address.country,
                    zip_code: request.customer.address.zip_code,
                },
            },
            items: request.items.into_iter().map(Into::into).collect(),
            items_cents: request.items_cents,
            tax_cents: request.tax_cents,
            shipping_cents: request.shipping_cents,
            total_cents: request.total_cents,
            payment: PaymentInfo {
                method: PaymentMethod::from_db(request.payment.method.as_deref().unwrap_or("")),
                status: PaymentStatus::from_db(request.payment.status.as_deref().unwrap_or("")),
                reference: request.payment.reference,
            },
            is_paid: request.is_paid,
            is_delivered: request.is_delivered,
            notes: request.notes,
        }
    }
}

/// Placed Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PlacedOrderResponse {
    pub success: bool,
    pub order: OrderResponse,
    pub email_status: EmailStatusResponse,
}

/// Place Order Handler
///
/// The one storefront write: reserves stock, persists the order and reports
/// how the mail fan-out went.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PlaceOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PlacedOrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let placed = state
        .app
        .orders
        .place_order(request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/orders/{}", placed.order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(
        order_uuid = %placed.order.uuid,
        total_cents = placed.order.total_cents,
        "placed order"
    );

    Ok(Json(PlacedOrderResponse {
        success: true,
        order: placed.order.into(),
        email_status: placed.email_status.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use vend_app::domain::{
        orders::{
            MockOrdersService, OrdersServiceError,
            service::{EmailStatus, PlacedOrder},
        },
        products::records::ProductUuid,
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{make_order, orders_service},
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders").post(handler))
    }

    fn order_body(product: ProductUuid) -> serde_json::Value {
        json!({
            "customer": {
                "name": "Jo Customer",
                "email": "jo@example.com",
                "phone": "+1-555-0100",
                "address": {
                    "street": "1 Main St",
                    "city": "Springfield",
                    "state": "IL",
                    "country": "US",
                    "zip_code": "62701",
                },
            },
            "items": [{
                "product_uuid": product,
                "name": "X1 Laptop",
                "price_cents": 19_900,
                "quantity": 3,
            }],
            "items_cents": 59_700,
            "total_cents": 59_700,
        })
    }

    #[tokio::test]
    async fn test_place_order_returns_201_with_email_status() -> TestResult {
        let mut orders = MockOrdersService::new();
        let product = ProductUuid::new();

        orders
            .expect_place_order()
            .once()
            .withf(move |new| {
                new.items.len() == 1
                    && new.items[0].product_uuid == product
                    && new.items[0].quantity == 3
                    && new.customer.email == "jo@example.com"
            })
            .return_once(|_| {
                Ok(PlacedOrder {
                    order: make_order("Jo Customer"),
                    email_status: EmailStatus {
                        confirmation_sent: true,
                        notification_sent: false,
                        errors: vec!["admin alert: gateway timed out".to_owned()],
                    },
                })
            });

        let mut res = TestClient::post("http://example.com/orders")
            .json(&order_body(product))
            .send(&make_service(orders))
            .await;

        let body: PlacedOrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert!(body.success);
        assert!(body.email_status.confirmation_sent);
        assert!(!body.email_status.notification_sent);
        assert_eq!(body.email_status.errors.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_place_order_unknown_product_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();
        let product = ProductUuid::new();

        orders
            .expect_place_order()
            .once()
            .return_once(move |_| Err(OrdersServiceError::ProductNotFound(product)));

        let mut res = TestClient::post("http://example.com/orders")
            .json(&order_body(product))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorResponse = res.take_json().await?;

        assert!(!body.success);
        assert_eq!(body.message, format!("Product {product} not found"));

        Ok(())
    }

    #[tokio::test]
    async fn test_place_order_insufficient_stock_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();
        let product = ProductUuid::new();

        orders
            .expect_place_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::InsufficientStock("X1 Laptop".to_owned())));

        let res = TestClient::post("http://example.com/orders")
            .json(&order_body(product))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_place_order_empty_items_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .withf(|new| new.items.is_empty())
            .return_once(|_| Err(OrdersServiceError::EmptyOrder));

        let mut body = order_body(ProductUuid::new());
        body["items"] = json!([]);

        let res = TestClient::post("http://example.com/orders")
            .json(&body)
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
