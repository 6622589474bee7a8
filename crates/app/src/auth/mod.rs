//! Admin authentication.
//!
//! Email + password login backed by argon2 hashes, with opaque session
//! tokens for subsequent bearer auth.

pub mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod token;

pub use errors::AuthServiceError;
pub use records::{AdminUserUuid, AuthedUser, IssuedSession, Role, SessionUuid};
pub use service::*;
