//! Auth repository.

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::auth::records::{AdminUserRecord, AdminUserUuid, SessionRecord, SessionUuid};

const FIND_ADMIN_BY_EMAIL_SQL: &str = include_str!("sql/find_admin_by_email.sql");
const CREATE_SESSION_SQL: &str = include_str!("sql/create_session.sql");
const FIND_SESSION_USER_SQL: &str = include_str!("sql/find_session_user.sql");
const DELETE_SESSION_SQL: &str = include_str!("sql/delete_session.sql");

/// A session row joined with its still-active owner.
#[derive(Debug, Clone)]
pub(crate) struct SessionUser {
    pub token_digest: String,
    pub expires_at: Timestamp,
    pub user: AdminUserRecord,
}

impl<'r> FromRow<'r, PgRow> for SessionUser {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            token_digest: row.try_get("token_digest")?,
            expires_at: row.try_get::<SqlxTimestamp, _>("expires_at")?.to_jiff(),
            user: AdminUserRecord::from_row(row)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAuthRepository;

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_admin_by_email(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<Option<AdminUserRecord>, sqlx::Error> {
        query_as::<Postgres, AdminUserRecord>(FIND_ADMIN_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_session(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session: SessionUuid,
        user: AdminUserUuid,
        token_digest: &str,
        expires_at: Timestamp,
    ) -> Result<SessionRecord, sqlx::Error> {
        query_as::<Postgres, SessionRecord>(CREATE_SESSION_SQL)
            .bind(session.into_uuid())
            .bind(user.into_uuid())
            .bind(token_digest)
            .bind(SqlxTimestamp::from(expires_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_session_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session: SessionUuid,
    ) -> Result<Option<SessionUser>, sqlx::Error> {
        query_as::<Postgres, SessionUser>(FIND_SESSION_USER_SQL)
            .bind(session.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_session(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session: SessionUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_SESSION_SQL)
            .bind(session.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
