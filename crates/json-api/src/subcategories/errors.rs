//! Subcategory Errors

use salvo::http::StatusError;
use tracing::error;

use vend_app::domain::subcategories::SubcategoriesServiceError;

pub(crate) fn into_status_error(error: SubcategoriesServiceError) -> StatusError {
    match error {
        SubcategoriesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Subcategory already exists")
        }
        SubcategoriesServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown parent category")
        }
        SubcategoriesServiceError::MissingRequiredData | SubcategoriesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid subcategory payload")
        }
        SubcategoriesServiceError::Sql(source) => {
            error!("subcategory storage error: {source}");

            StatusError::internal_server_error()
        }
        SubcategoriesServiceError::NotFound => {
            StatusError::not_found().brief("Subcategory not found")
        }
    }
}
