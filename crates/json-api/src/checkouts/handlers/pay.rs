//! Confirm Payment Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use storefront_app::domain::checkouts::{data::PaymentConfirmation, records::CheckoutUuid};

use crate::{
    checkouts::{errors::into_status_error, models::CheckoutResponse},
    extensions::*,
    state::State,
};

/// Confirm Payment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConfirmPaymentRequest {
    /// Gateway outcome; only `paid` confirms the payment
    pub payment_status: String,

    /// Opaque gateway payload, stored as received
    #[serde(default)]
    pub payment_details: Option<Value>,
}

/// Confirm Payment Handler
///
/// Records the payment gateway outcome for a checkout session. Confirming an
/// already paid session returns it unchanged.
#[endpoint(
    tags("checkout"),
    summary = "Confirm Payment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payment recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Payment failed or finalized"),
        (status_code = StatusCode::NOT_FOUND, description = "Checkout not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "checkouts.pay",
    skip(checkout, json, depot),
    fields(checkout_uuid = tracing::field::Empty, payment_status = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    checkout: PathParam<Uuid>,
    json: JsonBody<ConfirmPaymentRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;
    let checkout = CheckoutUuid::from_uuid(checkout.into_inner());
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("checkout_uuid", tracing::field::display(checkout));
    span.record("payment_status", request.payment_status.as_str());

    let checkout = state
        .app
        .checkouts
        .confirm_payment(
            user.uuid,
            checkout,
            PaymentConfirmation {
                payment_status: request.payment_status,
                payment_details: request.payment_details,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(checkout.into()))
}
