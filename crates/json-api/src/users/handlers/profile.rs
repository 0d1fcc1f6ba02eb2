//! Profile Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*, state::State, users::errors::into_status_error, users::models::UserResponse,
};

/// Profile Handler
///
/// Returns the authenticated user.
#[endpoint(
    tags("users"),
    summary = "Get Profile",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.current_user_or_401()?;

    let user = state
        .app
        .users
        .get_user(caller.uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
