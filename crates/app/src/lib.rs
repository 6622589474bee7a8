//! Shared application domain and persistence modules.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod mail;

#[cfg(test)]
mod test;

mod slug;
mod uuids;

pub use slug::slugify;
pub use uuids::TypedUuid;
