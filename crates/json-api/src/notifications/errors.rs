//! Notification Errors

use salvo::http::StatusError;
use tracing::error;

use vend_app::domain::notifications::NotificationsServiceError;

pub(crate) fn into_status_error(error: NotificationsServiceError) -> StatusError {
    match error {
        NotificationsServiceError::MissingRequiredData | NotificationsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid notification payload")
        }
        NotificationsServiceError::Sql(source) => {
            error!("notification storage error: {source}");

            StatusError::internal_server_error()
        }
        NotificationsServiceError::NotFound => {
            StatusError::not_found().brief("Notification not found")
        }
    }
}
