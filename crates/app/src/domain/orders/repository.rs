//! Orders Repository

use std::collections::HashMap;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    listing::PageRequest,
    orders::{
        data::{NewOrder, OrderFilter},
        records::{OrderItemRecord, OrderRecord, OrderStatus, OrderUuid},
    },
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const CREATE_ORDER_ITEM_SQL: &str = include_str!("sql/create_order_item.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const COUNT_ORDERS_SQL: &str = include_str!("sql/count_orders.sql");
const LIST_ORDER_ITEMS_SQL: &str = include_str!("sql/list_order_items.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("sql/update_order_status.sql");
const DELETE_ORDER_SQL: &str = include_str!("sql/delete_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        new: &NewOrder,
    ) -> Result<OrderRecord, sqlx::Error> {
        let mut record = query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(&new.customer.name)
            .bind(&new.customer.email)
            .bind(&new.customer.phone)
            .bind(&new.customer.address.street)
            .bind(&new.customer.address.city)
            .bind(&new.customer.address.state)
            .bind(&new.customer.address.country)
            .bind(&new.customer.address.zip_code)
            .bind(new.items_cents)
            .bind(new.tax_cents)
            .bind(new.shipping_cents)
            .bind(new.total_cents)
            .bind(new.payment.method.as_str())
            .bind(new.payment.status.as_str())
            .bind(new.payment.reference.as_deref())
            .bind(OrderStatus::default().as_str())
            .bind(new.is_paid)
            .bind(new.is_delivered)
            .bind(new.notes.as_deref())
            .fetch_one(&mut **tx)
            .await?;

        for (position, item) in new.items.iter().enumerate() {
            query(CREATE_ORDER_ITEM_SQL)
                .bind(order.into_uuid())
                .bind(item.product_uuid.into_uuid())
                .bind(&item.name)
                .bind(item.price_cents)
                .bind(item.quantity)
                .bind(item.image_url.as_deref())
                .bind(i32::try_from(position).unwrap_or(i32::MAX))
                .execute(&mut **tx)
                .await?;

            record.items.push(OrderItemRecord {
                product_uuid: item.product_uuid,
                name: item.name.clone(),
                price_cents: item.price_cents,
                quantity: item.quantity,
                image_url: item.image_url.clone(),
            });
        }

        Ok(record)
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        let mut record = query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        self.attach_items(tx, std::slice::from_mut(&mut record))
            .await?;

        Ok(record)
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &OrderFilter,
        page: PageRequest,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        let sql = format!(
            "{LIST_ORDERS_SQL} ORDER BY {} {} LIMIT $7 OFFSET $8",
            filter.sort_key.as_sql(),
            filter.sort_order.as_sql(),
        );

        let mut records = query_as::<Postgres, OrderRecord>(&sql)
            .bind(filter.uuid.map(Uuid::from))
            .bind(filter.status.map(OrderStatus::as_str))
            .bind(filter.min_date.map(SqlxTimestamp::from))
            .bind(filter.max_date.map(SqlxTimestamp::from))
            .bind(filter.min_total_cents)
            .bind(filter.max_total_cents)
            .bind(i64::from(page.limit()))
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await?;

        self.attach_items(tx, &mut records).await?;

        Ok(records)
    }

    pub(crate) async fn count_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &OrderFilter,
    ) -> Result<u64, sqlx::Error> {
        let total: i64 = query_scalar(COUNT_ORDERS_SQL)
            .bind(filter.uuid.map(Uuid::from))
            .bind(filter.status.map(OrderStatus::as_str))
            .bind(filter.min_date.map(SqlxTimestamp::from))
            .bind(filter.max_date.map(SqlxTimestamp::from))
            .bind(filter.min_total_cents)
            .bind(filter.max_total_cents)
            .fetch_one(&mut **tx)
            .await?;

        Ok(total.unsigned_abs())
    }

    pub(crate) async fn update_order_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, sqlx::Error> {
        let mut record = query_as::<Postgres, OrderRecord>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await?;

        self.attach_items(tx, std::slice::from_mut(&mut record))
            .await?;

        Ok(record)
    }

    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Load line items for a batch of orders in one query and attach them to
    /// their parent records.
    async fn attach_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &mut [OrderRecord],
    ) -> Result<(), sqlx::Error> {
        if orders.is_empty() {
            return Ok(());
        }

        let uuids: Vec<Uuid> = orders.iter().map(|order| order.uuid.into_uuid()).collect();

        let rows = query(LIST_ORDER_ITEMS_SQL)
            .bind(&uuids)
            .fetch_all(&mut **tx)
            .await?;

        let mut by_order: HashMap<Uuid, Vec<OrderItemRecord>> = HashMap::new();

        for row in rows {
            let order_uuid: Uuid = row.try_get("order_uuid")?;
            let item = OrderItemRecord::from_row(&row)?;
            by_order.entry(order_uuid).or_default().push(item);
        }

        for order in orders {
            if let Some(items) = by_order.remove(&order.uuid.into_uuid()) {
                order.items = items;
            }
        }

        Ok(())
    }
}
