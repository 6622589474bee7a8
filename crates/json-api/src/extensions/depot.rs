//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use vend_app::auth::AuthedUser;

const AUTHED_USER_KEY: &str = "vend::authed_user";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_authed_user(&mut self, user: AuthedUser);

    fn authed_user_or_401(&self) -> Result<&AuthedUser, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_authed_user(&mut self, user: AuthedUser) {
        self.insert(AUTHED_USER_KEY, user);
    }

    fn authed_user_or_401(&self) -> Result<&AuthedUser, StatusError> {
        self.get::<AuthedUser>(AUTHED_USER_KEY)
            .map_err(|_ignored| StatusError::unauthorized().brief("Authentication required"))
    }
}
