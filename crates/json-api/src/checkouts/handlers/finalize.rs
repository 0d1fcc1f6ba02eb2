//! Finalize Checkout Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use storefront_app::domain::checkouts::records::CheckoutUuid;

use crate::{
    checkouts::errors::into_status_error, extensions::*, orders::models::OrderResponse,
    state::State,
};

/// Finalize Checkout Handler
///
/// Turns a paid checkout session into an order and clears the user's cart.
#[endpoint(
    tags("checkout"),
    summary = "Finalize Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unpaid or already finalized"),
        (status_code = StatusCode::NOT_FOUND, description = "Checkout not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "checkouts.finalize",
    skip(checkout, depot, res),
    fields(checkout_uuid = tracing::field::Empty, order_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    checkout: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;
    let checkout = CheckoutUuid::from_uuid(checkout.into_inner());

    let span = tracing::Span::current();

    span.record("checkout_uuid", tracing::field::display(checkout));

    let order = state
        .app
        .checkouts
        .finalize(user.uuid, checkout)
        .await
        .map_err(into_status_error)?;

    span.record("order_uuid", tracing::field::display(order.uuid));

    res.add_header(LOCATION, format!("/api/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
