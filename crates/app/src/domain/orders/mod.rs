//! Orders
//!
//! Order placement is the one multi-step mutation in the system: stock is
//! reserved per line item, the order snapshot is persisted, and confirmation
//! mail plus in-app notifications fan out best-effort afterwards.

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;
