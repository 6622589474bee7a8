//! Notification Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use vend_app::domain::listing::PageRequest;

use crate::{
    extensions::*,
    notifications::{
        errors::into_status_error,
        models::{NotificationListResponse, NotificationResponse},
    },
    state::State,
};

/// Notification Index Handler
///
/// Newest-first page of notifications plus the unread badge count.
#[endpoint(
    tags("notifications"),
    summary = "List Notifications",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<NotificationListResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = PageRequest::new(
        req.query("page"),
        req.query("limit"),
        PageRequest::DEFAULT_LIMIT,
    );

    let page = state
        .app
        .notifications
        .list_notifications(page)
        .await
        .map_err(into_status_error)?;

    let data: Vec<NotificationResponse> =
        page.notifications.into_iter().map(Into::into).collect();

    Ok(Json(NotificationListResponse {
        success: true,
        count: data.len(),
        unread_count: page.unread_count,
        pagination: page.page_info.into(),
        data,
    }))
}
