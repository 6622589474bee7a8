//! Notification Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod events;
pub(crate) mod index;
pub(crate) mod mark_all_read;
pub(crate) mod mark_read;
