//! Notification API models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vend_app::domain::notifications::records::NotificationRecord;

use crate::pagination::Pagination;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NotificationResponse {
    pub uuid: Uuid,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub data: serde_json::Value,
    pub read: bool,
    pub created_at: String,
}

impl From<NotificationRecord> for NotificationResponse {
    fn from(notification: NotificationRecord) -> Self {
        Self {
            uuid: notification.uuid.into(),
            title: notification.title,
            message: notification.message,
            kind: notification.kind.as_str().to_owned(),
            data: notification.data,
            read: notification.read,
            created_at: notification.created_at.to_string(),
        }
    }
}

/// List envelope for notifications; carries the unread count on top of the
/// usual pagination block.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NotificationListResponse {
    pub success: bool,
    pub count: usize,
    pub unread_count: u64,
    pub pagination: Pagination,
    pub data: Vec<NotificationResponse>,
}
