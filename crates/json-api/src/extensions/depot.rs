//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use storefront_app::auth::AuthenticatedUser;

/// Helpers for depot values that handlers rely on.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_current_user(&mut self, user: AuthenticatedUser);

    /// The verified caller, if the request carried a valid bearer token.
    fn current_user(&self) -> Option<AuthenticatedUser>;

    fn current_user_or_401(&self) -> Result<AuthenticatedUser, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_current_user(&mut self, user: AuthenticatedUser) {
        self.inject(user);
    }

    fn current_user(&self) -> Option<AuthenticatedUser> {
        self.obtain::<AuthenticatedUser>().ok().copied()
    }

    fn current_user_or_401(&self) -> Result<AuthenticatedUser, StatusError> {
        self.current_user()
            .ok_or_else(|| StatusError::unauthorized().brief("Not authorized, no token"))
    }
}
