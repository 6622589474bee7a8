//! Orders Data

use jiff::Timestamp;

use crate::domain::{
    listing::SortOrder,
    orders::records::{CustomerSnapshot, OrderStatus, OrderUuid, PaymentInfo},
    products::records::ProductUuid,
};

/// One requested line item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub image_url: Option<String>,
}

/// New Order Data
///
/// Totals are taken from the client as-is; the server does not recompute or
/// verify them.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer: CustomerSnapshot,
    pub items: Vec<NewOrderItem>,
    pub items_cents: i64,
    pub tax_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
    pub payment: PaymentInfo,
    pub is_paid: bool,
    pub is_delivered: bool,
    pub notes: Option<String>,
}

/// Recognised order sort columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSortKey {
    TotalPrice,
    Status,
    #[default]
    CreatedAt,
}

impl OrderSortKey {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::TotalPrice => "o.total_cents",
            Self::Status => "o.order_status",
            Self::CreatedAt => "o.created_at",
        }
    }

    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("totalPrice" | "total") => Self::TotalPrice,
            Some("status" | "orderStatus") => Self::Status,
            _ => Self::CreatedAt,
        }
    }
}

/// Order listing filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderFilter {
    /// Exact order uuid lookup; non-uuid search input matches nothing.
    pub uuid: Option<OrderUuid>,
    pub status: Option<OrderStatus>,
    pub min_date: Option<Timestamp>,
    pub max_date: Option<Timestamp>,
    pub min_total_cents: Option<i64>,
    pub max_total_cents: Option<i64>,
    pub sort_key: OrderSortKey,
    pub sort_order: SortOrder,
}
