//! Update User Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::users::{data::UserUpdate, records::Role};

use crate::{
    extensions::*, state::State, users::errors::into_status_error, users::models::UserResponse,
};

/// Update User Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl TryFrom<UpdateUserRequest> for UserUpdate {
    type Error = StatusError;

    fn try_from(request: UpdateUserRequest) -> Result<Self, Self::Error> {
        Ok(UserUpdate {
            name: request.name,
            email: request.email,
            role: request
                .role
                .as_deref()
                .map(str::parse::<Role>)
                .transpose()
                .or_400("Invalid role")?,
        })
    }
}

/// Update User Handler
///
/// Changes a user's name, email or role. Admin only.
#[endpoint(
    tags("admin"),
    summary = "Update User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "User updated"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "users.update",
    skip(user, json, depot),
    fields(user_uuid = tracing::field::Empty, role = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    json: JsonBody<UpdateUserRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = user.into_inner();
    let update = UserUpdate::try_from(json.into_inner())?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));

    if let Some(role) = update.role {
        span.record("role", tracing::field::display(role));
    }

    let user = state
        .app
        .users
        .update_user(user.into(), update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
