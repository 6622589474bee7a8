//! Shared integration-test infrastructure.
//!
//! Service-level tests run against a real Postgres started once per test run;
//! each test gets its own freshly bootstrapped database, so state never leaks
//! between tests and no rollback tricks are needed.

mod helpers;

pub(crate) use context::TestContext;
pub(crate) use helpers::seed_product;
