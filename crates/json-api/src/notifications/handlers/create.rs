//! Create Notification Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vend_app::domain::notifications::data::{NewNotification, NotificationKind};

use crate::{
    extensions::*,
    notifications::{errors::into_status_error, models::NotificationResponse},
    state::State,
};

/// Create Notification Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateNotificationRequest {
    pub title: String,
    pub message: String,
    /// One of `low_stock`, `order`, `new_order`; anything else is stored as
    /// `other`.
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl From<CreateNotificationRequest> for NewNotification {
    fn from(request: CreateNotificationRequest) -> Self {
        NewNotification {
            title: request.title,
            message: request.message,
            kind: NotificationKind::from_db(request.kind.as_deref().unwrap_or("")),
            data: request.data,
        }
    }
}

/// Create Notification Handler
///
/// Persists the notification and pushes it to connected event streams.
#[endpoint(
    tags("notifications"),
    summary = "Create Notification",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Notification created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateNotificationRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<NotificationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    if request.title.trim().is_empty() {
        return Err(StatusError::bad_request().brief("Notification title is required"));
    }

    let notification = state
        .app
        .notifications
        .create_notification(request.into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    tracing::info!(notification_uuid = %notification.uuid, "created notification");

    Ok(Json(notification.into()))
}
