//! Notification Records

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Row, postgres::PgRow};

use crate::{domain::notifications::data::NotificationKind, uuids::TypedUuid};

/// Notification UUID
pub type NotificationUuid = TypedUuid<NotificationRecord>;

/// Notification Record
#[derive(Debug, Clone)]
pub struct NotificationRecord {
    pub uuid: NotificationUuid,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    /// Free-form payload, e.g. the related order or product uuid.
    pub data: serde_json::Value,
    pub read: bool,
    pub created_at: Timestamp,
}

impl<'r> FromRow<'r, PgRow> for NotificationRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let kind: String = row.try_get("kind")?;

        Ok(Self {
            uuid: NotificationUuid::from_uuid(row.try_get("uuid")?),
            title: row.try_get("title")?,
            message: row.try_get("message")?,
            kind: NotificationKind::from_db(&kind),
            data: row.try_get("data")?,
            read: row.try_get("read")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
