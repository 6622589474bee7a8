//! Products Repository

use sqlx::{Postgres, Transaction, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    listing::PageRequest,
    products::{
        data::{NewProduct, ProductFilter, ProductUpdate},
        records::{ProductRecord, ProductStock, ProductUuid},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const LOCK_PRODUCT_STOCK_SQL: &str = include_str!("sql/lock_product_stock.sql");
const DECREMENT_STOCK_SQL: &str = include_str!("sql/decrement_stock.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let sql = format!(
            "{LIST_PRODUCTS_SQL} ORDER BY {} {} LIMIT $7 OFFSET $8",
            filter.sort.key.as_sql(),
            filter.sort.order.as_sql(),
        );

        query_as::<Postgres, ProductRecord>(&sql)
            .bind(filter.search.as_deref())
            .bind(filter.category.map(Uuid::from))
            .bind(filter.subcategory.map(Uuid::from))
            .bind(filter.min_price_cents)
            .bind(filter.max_price_cents)
            .bind(filter.brand.as_deref())
            .bind(i64::from(page.limit()))
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
    ) -> Result<u64, sqlx::Error> {
        let total: i64 = query_scalar(COUNT_PRODUCTS_SQL)
            .bind(filter.search.as_deref())
            .bind(filter.category.map(Uuid::from))
            .bind(filter.subcategory.map(Uuid::from))
            .bind(filter.min_price_cents)
            .bind(filter.max_price_cents)
            .bind(filter.brand.as_deref())
            .fetch_one(&mut **tx)
            .await?;

        Ok(total.unsigned_abs())
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        slug: &str,
        new: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(&new.name)
            .bind(slug)
            .bind(&new.description)
            .bind(new.price_cents)
            .bind(new.stock)
            .bind(new.category_uuid.into_uuid())
            .bind(new.subcategory_uuid.into_uuid())
            .bind(&new.image_urls)
            .bind(new.brand.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        slug: Option<&str>,
        update: &ProductUpdate,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(update.name.as_deref())
            .bind(slug)
            .bind(update.description.as_deref())
            .bind(update.price_cents)
            .bind(update.stock)
            .bind(update.category_uuid.map(Uuid::from))
            .bind(update.subcategory_uuid.map(Uuid::from))
            .bind(update.image_urls.as_deref())
            .bind(update.brand.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Lock a product row for the duration of the enclosing transaction and
    /// return its current stock, or `None` when the product does not exist.
    pub(crate) async fn lock_product_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<ProductStock>, sqlx::Error> {
        query_as::<Postgres, ProductStock>(LOCK_PRODUCT_STOCK_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Conditionally decrement stock; the guard `stock >= quantity` makes the
    /// update a no-op when stock is insufficient, in which case `None` is
    /// returned. `in_stock` is recomputed in the same statement.
    pub(crate) async fn decrement_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        quantity: i32,
    ) -> Result<Option<ProductStock>, sqlx::Error> {
        query_as::<Postgres, ProductStock>(DECREMENT_STOCK_SQL)
            .bind(product.into_uuid())
            .bind(quantity)
            .fetch_optional(&mut **tx)
            .await
    }
}
