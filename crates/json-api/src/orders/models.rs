//! Order API models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vend_app::domain::orders::{
    records::{Address, CustomerSnapshot, OrderItemRecord, OrderRecord, PaymentInfo},
    service::EmailStatus,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressResponse {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            city: address.city,
            state: address.state,
            country: address.country,
            zip_code: address.zip_code,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerResponse {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: AddressResponse,
}

impl From<CustomerSnapshot> for CustomerResponse {
    fn from(customer: CustomerSnapshot) -> Self {
        Self {
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            address: customer.address.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentResponse {
    pub method: String,
    pub status: String,
    pub reference: Option<String>,
}

impl From<PaymentInfo> for PaymentResponse {
    fn from(payment: PaymentInfo) -> Self {
        Self {
            method: payment.method.as_str().to_owned(),
            status: payment.status.as_str().to_owned(),
            reference: payment.reference,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub product_uuid: Uuid,
    pub name: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub image_url: Option<String>,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        Self {
            product_uuid: item.product_uuid.into(),
            name: item.name,
            price_cents: item.price_cents,
            quantity: item.quantity,
            image_url: item.image_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,
    pub customer: CustomerResponse,
    pub items: Vec<OrderItemResponse>,
    pub items_cents: i64,
    pub tax_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
    pub payment: PaymentResponse,
    pub status: String,
    pub is_paid: bool,
    pub paid_at: Option<String>,
    pub is_delivered: bool,
    pub delivered_at: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            uuid: order.uuid.into(),
            customer: order.customer.into(),
            items: order.items.into_iter().map(Into::into).collect(),
            items_cents: order.items_cents,
            tax_cents: order.tax_cents,
            shipping_cents: order.shipping_cents,
            total_cents: order.total_cents,
            payment: order.payment.into(),
            status: order.status.as_str().to_owned(),
            is_paid: order.is_paid,
            paid_at: order.paid_at.map(|at| at.to_string()),
            is_delivered: order.is_delivered,
            delivered_at: order.delivered_at.map(|at| at.to_string()),
            notes: order.notes,
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Fan-out summary attached to a successful placement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EmailStatusResponse {
    pub confirmation_sent: bool,
    pub notification_sent: bool,
    pub errors: Vec<String>,
}

impl From<EmailStatus> for EmailStatusResponse {
    fn from(status: EmailStatus) -> Self {
        Self {
            confirmation_sent: status.confirmation_sent,
            notification_sent: status.notification_sent,
            errors: status.errors,
        }
    }
}
