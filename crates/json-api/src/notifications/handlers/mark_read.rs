//! Mark Notification Read Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    notifications::{errors::into_status_error, models::NotificationResponse},
    state::State,
};

/// Mark Notification Read Handler
///
/// Idempotent; marking an already-read notification is a no-op success.
#[endpoint(
    tags("notifications"),
    summary = "Mark Notification Read",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<NotificationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let notification = state
        .app
        .notifications
        .mark_read(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(notification.into()))
}
