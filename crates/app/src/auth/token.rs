//! Session token formatting, parsing, and digest construction.
//!
//! A bearer token carries the session uuid in the clear plus a random secret;
//! only a SHA-256 digest of the secret is stored, so a leaked sessions table
//! cannot be replayed.

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::records::SessionUuid;

/// Session token identifier prefix.
pub const SESSION_TOKEN_PREFIX: &str = "vend";

/// Token format version segment.
pub const SESSION_TOKEN_VERSION: &str = "v1";

/// Number of secret bytes encoded in a token.
pub const SESSION_SECRET_BYTES: usize = 32;

#[derive(Debug, Clone)]
pub struct ParsedSessionToken {
    pub session_uuid: SessionUuid,
    pub secret_hex: String,
}

#[derive(Debug, Error)]
pub enum SessionTokenError {
    #[error("session token format is invalid")]
    InvalidFormat,

    #[error("session token uses an unsupported version")]
    UnsupportedVersion,
}

/// Generate a fresh hex-encoded token secret.
#[must_use]
pub fn generate_session_secret() -> String {
    let mut secret = [0_u8; SESSION_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    hex::encode(secret)
}

/// SHA-256 digest of the hex-encoded secret, as stored alongside the session.
#[must_use]
pub fn digest_session_secret(secret_hex: &str) -> String {
    hex::encode(Sha256::digest(secret_hex.as_bytes()))
}

#[must_use]
pub fn format_session_token(session_uuid: SessionUuid, secret_hex: &str) -> String {
    format!(
        "{SESSION_TOKEN_PREFIX}_{SESSION_TOKEN_VERSION}_{}.{secret_hex}",
        session_uuid.into_uuid().simple(),
    )
}

pub fn parse_session_token(token: &str) -> Result<ParsedSessionToken, SessionTokenError> {
    let (prefix_and_id, secret_hex) = token
        .split_once('.')
        .ok_or(SessionTokenError::InvalidFormat)?;

    let mut id_parts = prefix_and_id.splitn(3, '_');

    let prefix = id_parts.next().ok_or(SessionTokenError::InvalidFormat)?;
    let version = id_parts.next().ok_or(SessionTokenError::InvalidFormat)?;
    let uuid_segment = id_parts.next().ok_or(SessionTokenError::InvalidFormat)?;

    if prefix != SESSION_TOKEN_PREFIX {
        return Err(SessionTokenError::InvalidFormat);
    }

    if version != SESSION_TOKEN_VERSION {
        return Err(SessionTokenError::UnsupportedVersion);
    }

    let session_uuid =
        Uuid::try_parse(uuid_segment).map_err(|_| SessionTokenError::InvalidFormat)?;

    if secret_hex.len() != SESSION_SECRET_BYTES * 2
        || !secret_hex.bytes().all(|byte| byte.is_ascii_hexdigit())
    {
        return Err(SessionTokenError::InvalidFormat);
    }

    Ok(ParsedSessionToken {
        session_uuid: SessionUuid::from_uuid(session_uuid),
        secret_hex: secret_hex.to_owned(),
    })
}
