//! Auth service.
//!
//! Password login issues an opaque bearer token tied to a sessions row; every
//! authenticated request parses the token, loads the session, and compares the
//! stored secret digest. Failures collapse into `Unauthorized` so callers
//! cannot probe which check failed.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use async_trait::async_trait;
use jiff::{Timestamp, ToSpan};
use mockall::automock;

use crate::{
    auth::{
        errors::AuthServiceError,
        records::{AuthedUser, IssuedSession, SessionUuid},
        repository::PgAuthRepository,
        token::{
            digest_session_secret, format_session_token, generate_session_secret,
            parse_session_token,
        },
    },
    database::Db,
};

/// Sessions live for 30 days, matching the storefront's remembered-login
/// window.
const SESSION_TTL_HOURS: i64 = 30 * 24;

#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAuthRepository::new(),
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<IssuedSession, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .find_admin_by_email(&mut tx, email)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AuthServiceError::PasswordHash)?;

        if Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_err()
        {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let session_uuid = SessionUuid::new();
        let secret = generate_session_secret();
        let expires_at = Timestamp::now() + SESSION_TTL_HOURS.hours();

        let session = self
            .repository
            .create_session(
                &mut tx,
                session_uuid,
                user.uuid,
                &digest_session_secret(&secret),
                expires_at,
            )
            .await?;

        tx.commit().await?;

        Ok(IssuedSession {
            token: format_session_token(session.uuid, &secret),
            user: AuthedUser::from(&user),
            expires_at: session.expires_at,
        })
    }

    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AuthedUser, AuthServiceError> {
        let parsed = parse_session_token(bearer_token)?;

        let mut tx = self.db.begin().await?;

        let session = self
            .repository
            .find_session_user(&mut tx, parsed.session_uuid)
            .await?
            .ok_or(AuthServiceError::Unauthorized)?;

        tx.commit().await?;

        if session.expires_at <= Timestamp::now() {
            return Err(AuthServiceError::Unauthorized);
        }

        if digest_session_secret(&parsed.secret_hex) != session.token_digest {
            return Err(AuthServiceError::Unauthorized);
        }

        Ok(AuthedUser::from(&session.user))
    }

    async fn logout(&self, bearer_token: &str) -> Result<(), AuthServiceError> {
        let parsed = parse_session_token(bearer_token)?;

        let mut tx = self.db.begin().await?;

        // Deleting an already-gone session is still a successful logout.
        _ = self
            .repository
            .delete_session(&mut tx, parsed.session_uuid)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and issue a fresh session token.
    async fn login(&self, email: &str, password: &str) -> Result<IssuedSession, AuthServiceError>;

    /// Resolve a bearer token to the user it belongs to.
    async fn authenticate_bearer(&self, bearer_token: &str)
    -> Result<AuthedUser, AuthServiceError>;

    /// Revoke the session behind a bearer token; idempotent.
    async fn logout(&self, bearer_token: &str) -> Result<(), AuthServiceError>;
}
