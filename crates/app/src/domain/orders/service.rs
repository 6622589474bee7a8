//! Orders service.
//!
//! [`PgOrdersService::place_order`] is the one multi-step write path. Stock
//! reservation and the order snapshot happen inside a single transaction with
//! conditional decrements, so a failing line item rolls everything back and
//! two orders racing on the same product serialise on the row lock. Mail and
//! notification fan-out runs after commit and never fails the request.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde_json::json;
use tokio::task::JoinSet;

use crate::{
    database::Db,
    domain::{
        listing::{PageInfo, PageRequest},
        notifications::{
            data::{NewNotification, NotificationKind},
            service::NotificationsService,
        },
        orders::{
            data::{NewOrder, OrderFilter},
            errors::OrdersServiceError,
            records::{OrderRecord, OrderStatus, OrderUuid},
            repository::PgOrdersRepository,
        },
        products::{records::ProductStock, repository::PgProductsRepository},
    },
    mail::{MailError, Mailer},
};

/// Per-channel outcome of the post-commit fan-out, reported to the caller
/// instead of failing the placed order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailStatus {
    /// Customer confirmation mail went out.
    pub confirmation_sent: bool,
    /// Admin new-order mail went out.
    pub notification_sent: bool,
    /// One tagged entry per failed dispatch.
    pub errors: Vec<String>,
}

/// A successfully placed order plus the fan-out summary.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order: OrderRecord,
    pub email_status: EmailStatus,
}

pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
    products: PgProductsRepository,
    notifications: Arc<dyn NotificationsService>,
    mailer: Arc<dyn Mailer>,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, notifications: Arc<dyn NotificationsService>, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
            products: PgProductsRepository::new(),
            notifications,
            mailer,
        }
    }

    /// Reserve stock for every line item, returning the products whose
    /// remaining stock fell below the low-stock threshold.
    async fn reserve_stock(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        order: &NewOrder,
    ) -> Result<Vec<ProductStock>, OrdersServiceError> {
        let mut low_stock = Vec::new();

        for item in &order.items {
            let current = self
                .products
                .lock_product_stock(tx, item.product_uuid)
                .await?
                .ok_or(OrdersServiceError::ProductNotFound(item.product_uuid))?;

            if current.stock < item.quantity {
                return Err(OrdersServiceError::InsufficientStock(current.name));
            }

            let remaining = self
                .products
                .decrement_stock(tx, item.product_uuid, item.quantity)
                .await?
                .ok_or(OrdersServiceError::InsufficientStock(current.name))?;

            if remaining.is_low() {
                low_stock.push(remaining);
            }
        }

        Ok(low_stock)
    }

    async fn dispatch_mail(&self, order: &OrderRecord, low_stock: &[ProductStock]) -> EmailStatus {
        let mut alerts = JoinSet::new();

        for product in low_stock {
            let mailer = Arc::clone(&self.mailer);
            let product = product.clone();

            alerts.spawn(async move {
                let result = mailer.send_low_stock_alert(&product).await;
                (product.name, result)
            });
        }

        let (confirmation, new_order_alert) = tokio::join!(
            self.mailer.send_order_confirmation(order),
            self.mailer.send_new_order_alert(order),
        );

        let mut low_stock_results = Vec::with_capacity(low_stock.len());

        while let Some(joined) = alerts.join_next().await {
            match joined {
                Ok(outcome) => low_stock_results.push(outcome),
                Err(error) => tracing::error!(%error, "low stock mail task panicked"),
            }
        }

        email_status(confirmation, new_order_alert, low_stock_results)
    }

    async fn dispatch_notifications(&self, order: &OrderRecord, low_stock: &[ProductStock]) {
        let placed = NewNotification {
            title: "New Order Received".to_owned(),
            message: format!(
                "{} placed an order for {} item(s)",
                order.customer.name,
                order.items.len(),
            ),
            kind: NotificationKind::NewOrder,
            data: json!({
                "order_uuid": order.uuid,
                "total_cents": order.total_cents,
            }),
        };

        if let Err(error) = self.notifications.create_notification(placed).await {
            tracing::error!(%error, order = %order.uuid, "failed to record new order notification");
        }

        for product in low_stock {
            let alert = NewNotification {
                title: "Low Stock Alert".to_owned(),
                message: format!("{} is running low ({} left)", product.name, product.stock),
                kind: NotificationKind::LowStock,
                data: json!({
                    "product_uuid": product.uuid,
                    "stock": product.stock,
                }),
            };

            if let Err(error) = self.notifications.create_notification(alert).await {
                tracing::error!(
                    %error,
                    product = %product.uuid,
                    "failed to record low stock notification",
                );
            }
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn place_order(&self, order: NewOrder) -> Result<PlacedOrder, OrdersServiceError> {
        validate_items(&order)?;

        let mut tx = self.db.begin().await?;

        let low_stock = self.reserve_stock(&mut tx, &order).await?;

        let created = self
            .repository
            .create_order(&mut tx, OrderUuid::new(), &order)
            .await?;

        tx.commit().await?;

        let email_status = self.dispatch_mail(&created, &low_stock).await;
        self.dispatch_notifications(&created, &low_stock).await;

        Ok(PlacedOrder {
            order: created,
            email_status,
        })
    }

    async fn list_orders(
        &self,
        filter: OrderFilter,
        page: PageRequest,
    ) -> Result<(Vec<OrderRecord>, PageInfo), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx, &filter, page).await?;
        let total = self.repository.count_orders(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok((orders, PageInfo::new(page, total)))
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.repository.get_order(&mut tx, order).await?;
        let changed = current.status != status;

        let updated = self
            .repository
            .update_order_status(&mut tx, order, status)
            .await?;

        tx.commit().await?;

        // Re-submitting the current status is a no-op for notifications.
        if changed {
            let notification = NewNotification {
                title: "Order Status Updated".to_owned(),
                message: format!("Order status changed to {}", status.as_str()),
                kind: NotificationKind::Order,
                data: json!({
                    "order_uuid": updated.uuid,
                    "status": status.as_str(),
                }),
            };

            if let Err(error) = self.notifications.create_notification(notification).await {
                tracing::error!(%error, order = %updated.uuid, "failed to record status notification");
            }
        }

        Ok(updated)
    }

    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_order(&mut tx, order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validate, reserve stock, persist the order, then fan out mail and
    /// notifications best-effort.
    async fn place_order(&self, order: NewOrder) -> Result<PlacedOrder, OrdersServiceError>;

    /// Retrieve a filtered page of orders with their line items attached.
    async fn list_orders(
        &self,
        filter: OrderFilter,
        page: PageRequest,
    ) -> Result<(Vec<OrderRecord>, PageInfo), OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Persist a new status; a genuine change also records a notification.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Hard-delete an order and its line items.
    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError>;
}

/// Reject structurally invalid orders before touching the database.
fn validate_items(order: &NewOrder) -> Result<(), OrdersServiceError> {
    if order.items.is_empty() {
        return Err(OrdersServiceError::EmptyOrder);
    }

    for item in &order.items {
        if item.quantity < 1 || item.price_cents < 0 || item.name.is_empty() {
            return Err(OrdersServiceError::InvalidItem);
        }
    }

    Ok(())
}

/// Fold the per-channel mail results into the caller-visible summary.
fn email_status(
    confirmation: Result<(), MailError>,
    new_order_alert: Result<(), MailError>,
    low_stock: Vec<(String, Result<(), MailError>)>,
) -> EmailStatus {
    let mut status = EmailStatus {
        confirmation_sent: confirmation.is_ok(),
        notification_sent: new_order_alert.is_ok(),
        errors: Vec::new(),
    };

    if let Err(error) = confirmation {
        status.errors.push(format!("confirmation: {error}"));
    }

    if let Err(error) = new_order_alert {
        status.errors.push(format!("admin alert: {error}"));
    }

    for (name, result) in low_stock {
        if let Err(error) = result {
            status.errors.push(format!("low stock ({name}): {error}"));
        }
    }

    status
}
