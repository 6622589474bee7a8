//! Mark All Notifications Read Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, notifications::errors::into_status_error, state::State};

/// Mark All Read Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MarkAllReadResponse {
    pub success: bool,
    /// How many notifications flipped from unread to read.
    pub updated: u64,
}

/// Mark All Notifications Read Handler
#[endpoint(
    tags("notifications"),
    summary = "Mark All Notifications Read",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<MarkAllReadResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let updated = state
        .app
        .notifications
        .mark_all_read()
        .await
        .map_err(into_status_error)?;

    Ok(Json(MarkAllReadResponse {
        success: true,
        updated,
    }))
}
