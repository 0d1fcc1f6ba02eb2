//! Get Checkout Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use storefront_app::domain::checkouts::records::CheckoutUuid;

use crate::{
    checkouts::{errors::into_status_error, models::CheckoutResponse},
    extensions::*,
    state::State,
};

/// Get Checkout Handler
///
/// Returns one of the authenticated user's checkout sessions.
#[endpoint(
    tags("checkout"),
    summary = "Get Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Checkout session found"),
        (status_code = StatusCode::NOT_FOUND, description = "Checkout not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    checkout: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;

    let checkout = state
        .app
        .checkouts
        .get_checkout(user.uuid, CheckoutUuid::from_uuid(checkout.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(checkout.into()))
}
