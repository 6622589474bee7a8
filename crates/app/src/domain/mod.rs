//! Domain modules

pub mod categories;
pub mod listing;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod subcategories;
