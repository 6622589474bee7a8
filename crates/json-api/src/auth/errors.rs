//! Auth Errors

use salvo::http::StatusError;
use tracing::error;
use vend_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid email or password")
        }
        AuthServiceError::Unauthorized => {
            StatusError::unauthorized().brief("Invalid session token")
        }
        AuthServiceError::Sql(source) => {
            error!("auth storage error: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::PasswordHash => {
            error!("stored password hash is malformed");

            StatusError::internal_server_error()
        }
    }
}
