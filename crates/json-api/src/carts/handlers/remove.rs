//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{carts::data::RemoveCartItem, products::records::ProductUuid};

use crate::{
    carts::{errors::into_status_error, handlers::owner_or_404, models::CartResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RemoveCartItemRequest {
    pub product_uuid: Uuid,

    pub size: String,

    pub color: String,

    #[serde(default)]
    pub guest_id: Option<String>,
}

/// Remove Cart Item Handler
///
/// Removes a line from the caller's cart.
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or line not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RemoveCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let owner = owner_or_404(depot, request.guest_id.as_deref())?;

    let cart = state
        .app
        .carts
        .remove_item(
            owner,
            RemoveCartItem {
                product_uuid: ProductUuid::from_uuid(request.product_uuid),
                size: request.size,
                color: request.color,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
