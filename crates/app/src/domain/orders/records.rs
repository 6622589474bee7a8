//! Order Records

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Row, postgres::PgRow};

use crate::{domain::products::records::ProductUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Two-state order flow; there is deliberately no richer pipeline and no
/// terminal/cancelled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Received,
    Done,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Done => "done",
        }
    }

    #[must_use]
    pub fn from_db(value: &str) -> Self {
        match value {
            "done" => Self::Done,
            _ => Self::Received,
        }
    }

    /// Parse a status from request input; unknown values are rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "received" => Some(Self::Received),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

/// Payment method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Cod,
    Online,
}

impl PaymentMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cod => "cod",
            Self::Online => "online",
        }
    }

    #[must_use]
    pub fn from_db(value: &str) -> Self {
        match value {
            "online" => Self::Online,
            _ => Self::Cod,
        }
    }
}

/// Payment state reported by the payment channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    #[must_use]
    pub fn from_db(value: &str) -> Self {
        match value {
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Pending,
        }
    }
}

/// Shipping address snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

/// Customer snapshot embedded in the order at purchase time; there is no
/// customer-account entity to link back to.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSnapshot {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

/// Payment info attached to the order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentInfo {
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub reference: Option<String>,
}

/// One line item, snapshotted at purchase time so later product edits never
/// alter historical orders.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemRecord {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub image_url: Option<String>,
}

impl<'r> FromRow<'r, PgRow> for OrderItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            name: row.try_get("name")?,
            price_cents: row.try_get("price_cents")?,
            quantity: row.try_get("quantity")?,
            image_url: row.try_get("image_url")?,
        })
    }
}

/// Order Record
///
/// `is_paid`/`is_delivered` are independent of `status`; the system enforces
/// no invariant between them.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub customer: CustomerSnapshot,
    pub items: Vec<OrderItemRecord>,
    pub items_cents: i64,
    pub tax_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
    pub payment: PaymentInfo,
    pub status: OrderStatus,
    pub is_paid: bool,
    pub paid_at: Option<Timestamp>,
    pub is_delivered: bool,
    pub delivered_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("order_status")?;
        let payment_method: String = row.try_get("payment_method")?;
        let payment_status: String = row.try_get("payment_status")?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            customer: CustomerSnapshot {
                name: row.try_get("customer_name")?,
                email: row.try_get("customer_email")?,
                phone: row.try_get("customer_phone")?,
                address: Address {
                    street: row.try_get("address_street")?,
                    city: row.try_get("address_city")?,
                    state: row.try_get("address_state")?,
                    country: row.try_get("address_country")?,
                    zip_code: row.try_get("address_zip_code")?,
                },
            },
            // Line items are loaded in a second query and attached afterwards.
            items: Vec::new(),
            items_cents: row.try_get("items_cents")?,
            tax_cents: row.try_get("tax_cents")?,
            shipping_cents: row.try_get("shipping_cents")?,
            total_cents: row.try_get("total_cents")?,
            payment: PaymentInfo {
                method: PaymentMethod::from_db(&payment_method),
                status: PaymentStatus::from_db(&payment_status),
                reference: row.try_get("payment_reference")?,
            },
            status: OrderStatus::from_db(&status),
            is_paid: row.try_get("is_paid")?,
            paid_at: row
                .try_get::<Option<SqlxTimestamp>, _>("paid_at")?
                .map(SqlxTimestamp::to_jiff),
            is_delivered: row.try_get("is_delivered")?,
            delivered_at: row
                .try_get::<Option<SqlxTimestamp>, _>("delivered_at")?
                .map(SqlxTimestamp::to_jiff),
            notes: row.try_get("notes")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_parse_rejects_unknown_values() {
        assert_eq!(OrderStatus::parse("received"), Some(OrderStatus::Received));
        assert_eq!(OrderStatus::parse("done"), Some(OrderStatus::Done));
        assert_eq!(OrderStatus::parse("cancelled"), None);
        assert_eq!(OrderStatus::parse(""), None);
    }
}
