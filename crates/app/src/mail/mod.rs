//! Outbound mail.
//!
//! Delivery goes through an HTTP mail gateway; the [`Mailer`] trait is the
//! seam the order workflow depends on, so fan-out behaviour can be exercised
//! without a real gateway.

mod gateway;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::domain::{orders::records::OrderRecord, products::records::ProductStock};

pub use gateway::{HttpMailer, MailGatewayConfig};

/// Errors that can occur while talking to the mail gateway.
#[derive(Debug, Error)]
pub enum MailError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway returned a non-2xx response.
    #[error("unexpected response from mail gateway: {0}")]
    UnexpectedResponse(String),
}

#[automock]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send the customer their order confirmation.
    async fn send_order_confirmation(&self, order: &OrderRecord) -> Result<(), MailError>;

    /// Tell the shop admin a new order arrived.
    async fn send_new_order_alert(&self, order: &OrderRecord) -> Result<(), MailError>;

    /// Tell the shop admin a product is running low.
    async fn send_low_stock_alert(&self, product: &ProductStock) -> Result<(), MailError>;
}
