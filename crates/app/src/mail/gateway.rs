//! HTTP mail-gateway client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::{
    domain::{orders::records::OrderRecord, products::records::ProductStock},
    mail::{MailError, Mailer},
};

/// Configuration for the outbound mail gateway.
#[derive(Debug, Clone)]
pub struct MailGatewayConfig {
    /// Gateway base address, e.g. `"https://mail.internal:8025"`.
    pub addr: String,

    /// Gateway bearer token.
    pub token: String,

    /// Sender address for every message.
    pub from: String,

    /// Recipient for admin alerts (new orders, low stock).
    pub admin_email: String,
}

/// HTTP client for the outbound mail gateway.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    config: MailGatewayConfig,
    http: Client,
}

#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: String,
}

impl HttpMailer {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: MailGatewayConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn send(&self, message: &OutboundMessage<'_>) -> Result<(), MailError> {
        let url = format!("{}/v1/messages", self.config.addr);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(MailError::UnexpectedResponse(format!(
                "send request failed with status {status}: {text}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send_order_confirmation(&self, order: &OrderRecord) -> Result<(), MailError> {
        let html = format!(
            "<h2>Order Confirmation</h2>\
             <p>Dear {name},</p>\
             <p>Thank you for your order. It has been received and is being processed.</p>\
             <ul>\
             <li>Order ID: {uuid}</li>\
             <li>Order Date: {created_at}</li>\
             <li>Total Amount: {total}</li>\
             </ul>\
             <p>The retailer will contact you shortly regarding your order.</p>",
            name = order.customer.name,
            uuid = order.uuid,
            created_at = order.created_at,
            total = format_cents(order.total_cents),
        );

        self.send(&OutboundMessage {
            from: &self.config.from,
            to: &order.customer.email,
            subject: "Order Confirmation",
            html,
        })
        .await
    }

    async fn send_new_order_alert(&self, order: &OrderRecord) -> Result<(), MailError> {
        let html = format!(
            "<h2>New Order Notification</h2>\
             <p>A new order has been received.</p>\
             <ul>\
             <li>Order ID: {uuid}</li>\
             <li>Customer Name: {name}</li>\
             <li>Customer Email: {email}</li>\
             <li>Customer Phone: {phone}</li>\
             <li>Total Amount: {total}</li>\
             </ul>\
             <p>Check the admin panel for details.</p>",
            uuid = order.uuid,
            name = order.customer.name,
            email = order.customer.email,
            phone = order.customer.phone,
            total = format_cents(order.total_cents),
        );

        self.send(&OutboundMessage {
            from: &self.config.from,
            to: &self.config.admin_email,
            subject: "New Order Received",
            html,
        })
        .await
    }

    async fn send_low_stock_alert(&self, product: &ProductStock) -> Result<(), MailError> {
        let subject = format!("Low Stock Alert - {}", product.name);

        let html = format!(
            "<h2>Low Stock Alert</h2>\
             <p>Stock for the following product is running low:</p>\
             <ul>\
             <li>Product Name: {name}</li>\
             <li>Current Stock: {stock}</li>\
             <li>Product ID: {uuid}</li>\
             </ul>\
             <p>Please restock this item soon.</p>",
            name = product.name,
            stock = product.stock,
            uuid = product.uuid,
        );

        self.send(&OutboundMessage {
            from: &self.config.from,
            to: &self.config.admin_email,
            subject: &subject,
            html,
        })
        .await
    }
}

fn format_cents(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, (cents % 100).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_cents_pads_minor_units() {
        assert_eq!(format_cents(123_456), "1234.56");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(100), "1.00");
    }
}
