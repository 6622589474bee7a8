//! Auth service errors.

use sqlx::Error;
use thiserror::Error;

use crate::auth::token::SessionTokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// Wrong email or password; deliberately indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, expired, or revoked session token.
    #[error("unauthorized")]
    Unauthorized,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("password hash error")]
    PasswordHash,
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}

impl From<SessionTokenError> for AuthServiceError {
    fn from(_: SessionTokenError) -> Self {
        Self::Unauthorized
    }
}
