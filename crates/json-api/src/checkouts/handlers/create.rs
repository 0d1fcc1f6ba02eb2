//! Create Checkout Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::checkouts::{data::NewCheckout, records::CheckoutUuid};

use crate::{
    checkouts::{
        errors::into_status_error,
        models::{CheckoutResponse, ShippingAddressBody},
    },
    extensions::*,
    line_items::LineItemBody,
    state::State,
};

/// Create Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCheckoutRequest {
    /// Snapshot of the lines being purchased
    pub items: Vec<LineItemBody>,

    pub shipping_address: ShippingAddressBody,

    pub payment_method: String,

    /// Session total in pence/cents, stored as supplied
    pub total_price: u64,
}

impl CreateCheckoutRequest {
    fn into_new_checkout(self, uuid: CheckoutUuid) -> NewCheckout {
        NewCheckout {
            uuid,
            items: self.items.into_iter().map(Into::into).collect(),
            shipping_address: self.shipping_address.into(),
            payment_method: self.payment_method,
            total_price: self.total_price,
        }
    }
}

/// Create Checkout Handler
///
/// Opens a pending, unpaid checkout session for the authenticated user.
#[endpoint(
    tags("checkout"),
    summary = "Create Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Checkout session created"),
        (status_code = StatusCode::BAD_REQUEST, description = "No items in checkout"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;

    let checkout = state
        .app
        .checkouts
        .create_checkout(
            user.uuid,
            json.into_inner().into_new_checkout(CheckoutUuid::new()),
        )
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/checkout/{}", checkout.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(checkout.into()))
}
