//! Logout Handler

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{auth::errors::into_status_error, extensions::*, state::State};

/// Logout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LogoutResponse {
    pub success: bool,
}

/// Logout Handler
///
/// Revokes the session behind the presented bearer token.
#[endpoint(tags("auth"), summary = "Logout", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<LogoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    // The auth middleware already validated this header.
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_once(' '))
        .map(|(_scheme, token)| token.trim())
        .ok_or_else(StatusError::unauthorized)?;

    state
        .app
        .auth
        .logout(token)
        .await
        .map_err(into_status_error)?;

    Ok(Json(LogoutResponse { success: true }))
}
