//! Subcategories Repository

use sqlx::{Postgres, Transaction, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    categories::records::CategoryUuid,
    listing::PageRequest,
    subcategories::{
        data::SubcategoryFilter,
        records::{SubcategoryRecord, SubcategoryUuid},
    },
};

const LIST_SUBCATEGORIES_SQL: &str = include_str!("sql/list_subcategories.sql");
const COUNT_SUBCATEGORIES_SQL: &str = include_str!("sql/count_subcategories.sql");
const GET_SUBCATEGORY_SQL: &str = include_str!("sql/get_subcategory.sql");
const CREATE_SUBCATEGORY_SQL: &str = include_str!("sql/create_subcategory.sql");
const UPDATE_SUBCATEGORY_SQL: &str = include_str!("sql/update_subcategory.sql");
const DELETE_SUBCATEGORY_SQL: &str = include_str!("sql/delete_subcategory.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSubcategoriesRepository;

impl PgSubcategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_subcategories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &SubcategoryFilter,
        page: PageRequest,
    ) -> Result<Vec<SubcategoryRecord>, sqlx::Error> {
        let sql = format!(
            "{LIST_SUBCATEGORIES_SQL} ORDER BY {} {} LIMIT $3 OFFSET $4",
            filter.sort_key.as_sql(),
            filter.sort_order.as_sql(),
        );

        query_as::<Postgres, SubcategoryRecord>(&sql)
            .bind(filter.search.as_deref())
            .bind(filter.category.map(CategoryUuid::into_uuid))
            .bind(i64::from(page.limit()))
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_subcategories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &SubcategoryFilter,
    ) -> Result<u64, sqlx::Error> {
        let total: i64 = query_scalar(COUNT_SUBCATEGORIES_SQL)
            .bind(filter.search.as_deref())
            .bind(filter.category.map(CategoryUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await?;

        Ok(total.unsigned_abs())
    }

    pub(crate) async fn get_subcategory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subcategory: SubcategoryUuid,
    ) -> Result<SubcategoryRecord, sqlx::Error> {
        query_as::<Postgres, SubcategoryRecord>(GET_SUBCATEGORY_SQL)
            .bind(subcategory.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) async fn create_subcategory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subcategory: SubcategoryUuid,
        name: &str,
        slug: &str,
        description: &str,
        category: CategoryUuid,
        image_url: Option<&str>,
    ) -> Result<SubcategoryRecord, sqlx::Error> {
        query_as::<Postgres, SubcategoryRecord>(CREATE_SUBCATEGORY_SQL)
            .bind(subcategory.into_uuid())
            .bind(name)
            .bind(slug)
            .bind(description)
            .bind(category.into_uuid())
            .bind(image_url)
            .fetch_one(&mut **tx)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) async fn update_subcategory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subcategory: SubcategoryUuid,
        name: Option<&str>,
        slug: Option<&str>,
        description: Option<&str>,
        category: Option<Uuid>,
        image_url: Option<&str>,
    ) -> Result<SubcategoryRecord, sqlx::Error> {
        query_as::<Postgres, SubcategoryRecord>(UPDATE_SUBCATEGORY_SQL)
            .bind(subcategory.into_uuid())
            .bind(name)
            .bind(slug)
            .bind(description)
            .bind(category)
            .bind(image_url)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_subcategory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subcategory: SubcategoryUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_SUBCATEGORY_SQL)
            .bind(subcategory.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
