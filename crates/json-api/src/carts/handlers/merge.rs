//! Merge Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Merge Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MergeCartRequest {
    /// The guest cart to fold into the caller's cart
    pub guest_id: String,
}

/// Merge Cart Handler
///
/// Moves a guest cart's lines into the authenticated user's cart. Quantities
/// of matching lines are summed and the guest cart is removed.
#[endpoint(
    tags("cart"),
    summary = "Merge Guest Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Carts merged"),
        (status_code = StatusCode::BAD_REQUEST, description = "Guest cart is empty"),
        (status_code = StatusCode::NOT_FOUND, description = "Guest cart not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.merge",
    skip(json, depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<MergeCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user.uuid));

    let cart = state
        .app
        .carts
        .merge_guest_cart(json.into_inner().guest_id, user.uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
