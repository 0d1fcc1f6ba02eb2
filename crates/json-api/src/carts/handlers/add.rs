//! Add To Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{carts::data::AddCartItem, products::records::ProductUuid};

use crate::{
    carts::{errors::into_status_error, handlers::request_owner, models::CartResponse},
    extensions::*,
    state::State,
};

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddToCartRequest {
    pub product_uuid: Uuid,

    pub size: String,

    pub color: String,

    /// Must be at least 1
    pub quantity: u32,

    /// Guest identity from an earlier add; ignored for authenticated callers
    #[serde(default)]
    pub guest_id: Option<String>,
}

/// Add To Cart Handler
///
/// Adds a product variant to the caller's cart, creating the cart on first
/// use. Anonymous callers without a guest id get a new guest cart whose id is
/// returned in the response.
#[endpoint(
    tags("cart"),
    summary = "Add To Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::OK, description = "Item added to an existing cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let owner = request_owner(depot, request.guest_id.as_deref());

    let added = state
        .app
        .carts
        .add_item(
            owner,
            AddCartItem {
                product_uuid: ProductUuid::from_uuid(request.product_uuid),
                size: request.size,
                color: request.color,
                quantity: request.quantity,
            },
        )
        .await
        .map_err(into_status_error)?;

    if added.created {
        res.status_code(StatusCode::CREATED);
    }

    Ok(Json(added.cart.into()))
}
