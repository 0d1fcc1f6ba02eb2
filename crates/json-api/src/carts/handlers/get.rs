//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToParameters, prelude::*};
use serde::Deserialize;

use crate::{
    carts::{errors::into_status_error, handlers::owner_or_404, models::CartResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Default, Deserialize, ToParameters)]
#[salvo(parameters(default_parameter_in = Query))]
pub(crate) struct CartQuery {
    /// Guest identity returned by the first add to cart
    pub guest_id: Option<String>,
}

/// Get Cart Handler
///
/// Returns the caller's cart. Authenticated callers get their own cart and the
/// guest id is ignored.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart found"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    query: CartQuery,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = owner_or_404(depot, query.guest_id.as_deref())?;

    let cart = state
        .app
        .carts
        .get_cart(owner)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
