//! Products

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub use service::*;

/// Stock level below which a restock alert is raised.
pub const LOW_STOCK_THRESHOLD: i32 = 10;
