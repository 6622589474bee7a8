//! Notifications Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    listing::PageRequest,
    notifications::{
        data::NewNotification,
        records::{NotificationRecord, NotificationUuid},
    },
};

const LIST_NOTIFICATIONS_SQL: &str = include_str!("sql/list_notifications.sql");
const COUNT_NOTIFICATIONS_SQL: &str = include_str!("sql/count_notifications.sql");
const CREATE_NOTIFICATION_SQL: &str = include_str!("sql/create_notification.sql");
const MARK_NOTIFICATION_READ_SQL: &str = include_str!("sql/mark_notification_read.sql");
const MARK_ALL_NOTIFICATIONS_READ_SQL: &str = include_str!("sql/mark_all_notifications_read.sql");
const DELETE_NOTIFICATION_SQL: &str = include_str!("sql/delete_notification.sql");

/// Total and unread notification counts, fetched in one pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NotificationCounts {
    pub(crate) total: u64,
    pub(crate) unread: u64,
}

impl<'r> FromRow<'r, PgRow> for NotificationCounts {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let total: i64 = row.try_get("total")?;
        let unread: i64 = row.try_get("unread")?;

        Ok(Self {
            total: total.unsigned_abs(),
            unread: unread.unsigned_abs(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgNotificationsRepository;

impl PgNotificationsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_notifications(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        page: PageRequest,
    ) -> Result<Vec<NotificationRecord>, sqlx::Error> {
        query_as::<Postgres, NotificationRecord>(LIST_NOTIFICATIONS_SQL)
            .bind(i64::from(page.limit()))
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_notifications(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<NotificationCounts, sqlx::Error> {
        query_as::<Postgres, NotificationCounts>(COUNT_NOTIFICATIONS_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_notification(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        notification: NotificationUuid,
        new: &NewNotification,
    ) -> Result<NotificationRecord, sqlx::Error> {
        query_as::<Postgres, NotificationRecord>(CREATE_NOTIFICATION_SQL)
            .bind(notification.into_uuid())
            .bind(&new.title)
            .bind(&new.message)
            .bind(new.kind.as_str())
            .bind(&new.data)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn mark_notification_read(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        notification: NotificationUuid,
    ) -> Result<NotificationRecord, sqlx::Error> {
        query_as::<Postgres, NotificationRecord>(MARK_NOTIFICATION_READ_SQL)
            .bind(notification.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn mark_all_notifications_read(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(MARK_ALL_NOTIFICATIONS_READ_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_notification(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        notification: NotificationUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_NOTIFICATION_SQL)
            .bind(notification.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
