//! Notifications service.
//!
//! Besides persistence, the Postgres implementation owns the fire-and-forget
//! push channel: every created notification is broadcast to currently
//! subscribed admin sessions. Subscribers that lag or connect later only see
//! the record on their next poll.

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::broadcast;

use crate::{
    database::Db,
    domain::{
        listing::{PageInfo, PageRequest},
        notifications::{
            data::NewNotification,
            errors::NotificationsServiceError,
            records::{NotificationRecord, NotificationUuid},
            repository::PgNotificationsRepository,
        },
    },
};

/// Bounded push-channel capacity; lagging receivers drop messages silently.
const PUSH_CHANNEL_CAPACITY: usize = 64;

/// A page of notifications plus the caller-visible unread count.
#[derive(Debug, Clone)]
pub struct NotificationPage {
    pub notifications: Vec<NotificationRecord>,
    pub page_info: PageInfo,
    pub unread_count: u64,
}

#[derive(Debug)]
pub struct PgNotificationsService {
    db: Db,
    repository: PgNotificationsRepository,
    push: broadcast::Sender<NotificationRecord>,
}

impl PgNotificationsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        let (push, _initial_receiver) = broadcast::channel(PUSH_CHANNEL_CAPACITY);

        Self {
            db,
            repository: PgNotificationsRepository::new(),
            push,
        }
    }
}

#[async_trait]
impl NotificationsService for PgNotificationsService {
    async fn list_notifications(
        &self,
        page: PageRequest,
    ) -> Result<NotificationPage, NotificationsServiceError> {
        let mut tx = self.db.begin().await?;

        let notifications = self.repository.list_notifications(&mut tx, page).await?;
        let counts = self.repository.count_notifications(&mut tx).await?;

        tx.commit().await?;

        Ok(NotificationPage {
            notifications,
            page_info: PageInfo::new(page, counts.total),
            unread_count: counts.unread,
        })
    }

    async fn create_notification(
        &self,
        notification: NewNotification,
    ) -> Result<NotificationRecord, NotificationsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_notification(&mut tx, NotificationUuid::new(), &notification)
            .await?;

        tx.commit().await?;

        // Fire-and-forget: an Err here only means nobody is subscribed.
        _ = self.push.send(created.clone());

        Ok(created)
    }

    async fn mark_read(
        &self,
        notification: NotificationUuid,
    ) -> Result<NotificationRecord, NotificationsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .mark_notification_read(&mut tx, notification)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn mark_all_read(&self) -> Result<u64, NotificationsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.mark_all_notifications_read(&mut tx).await?;

        tx.commit().await?;

        Ok(rows_affected)
    }

    async fn delete_notification(
        &self,
        notification: NotificationUuid,
    ) -> Result<(), NotificationsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .delete_notification(&mut tx, notification)
            .await?;

        if rows_affected == 0 {
            return Err(NotificationsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<NotificationRecord> {
        self.push.subscribe()
    }
}

#[automock]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    /// Retrieve a newest-first page of notifications with the unread count.
    async fn list_notifications(
        &self,
        page: PageRequest,
    ) -> Result<NotificationPage, NotificationsServiceError>;

    /// Persist a notification and broadcast it to connected subscribers.
    async fn create_notification(
        &self,
        notification: NewNotification,
    ) -> Result<NotificationRecord, NotificationsServiceError>;

    /// Mark a single notification read; idempotent.
    async fn mark_read(
        &self,
        notification: NotificationUuid,
    ) -> Result<NotificationRecord, NotificationsServiceError>;

    /// Mark every unread notification read; returns how many flipped.
    async fn mark_all_read(&self) -> Result<u64, NotificationsServiceError>;

    /// Hard-delete a notification.
    async fn delete_notification(
        &self,
        notification: NotificationUuid,
    ) -> Result<(), NotificationsServiceError>;

    /// Subscribe to the push channel.
    fn subscribe(&self) -> broadcast::Receiver<NotificationRecord>;
}
