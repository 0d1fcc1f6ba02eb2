//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{carts::data::UpdateCartItem, products::records::ProductUuid};

use crate::{
    carts::{errors::into_status_error, handlers::owner_or_404, models::CartResponse},
    extensions::*,
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    pub product_uuid: Uuid,

    pub size: String,

    pub color: String,

    /// New quantity; zero or less removes the line
    pub quantity: i64,

    #[serde(default)]
    pub guest_id: Option<String>,
}

/// Update Cart Item Handler
///
/// Sets the quantity of a line in the caller's cart.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or line not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let owner = owner_or_404(depot, request.guest_id.as_deref())?;

    let cart = state
        .app
        .carts
        .update_item(
            owner,
            UpdateCartItem {
                product_uuid: ProductUuid::from_uuid(request.product_uuid),
                size: request.size,
                color: request.color,
                quantity: request.quantity,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::carts::{CartsServiceError, records::CartOwner};

    use crate::{
        catcher::ErrorResponse,
        test_helpers::{Mocks, anonymous_service, make_cart},
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("cart").put(handler)
    }

    #[tokio::test]
    async fn test_negative_quantity_is_forwarded() -> TestResult {
        let mut mocks = Mocks::default();
        let owner = CartOwner::Guest("guest_abc".to_string());
        let emptied = make_cart(owner.clone(), Vec::new());

        mocks
            .carts
            .expect_update_item()
            .once()
            .withf(move |requested, item| *requested == owner && item.quantity == -1)
            .return_once(move |_, _| Ok(emptied));

        let mut res = TestClient::put("http://example.com/cart")
            .json(&json!({
                "product_uuid": Uuid::now_v7(),
                "size": "M",
                "color": "White",
                "quantity": -1,
                "guest_id": "guest_abc",
            }))
            .send(&anonymous_service(mocks, route()))
            .await;

        let response: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(response.items.is_empty(), "line should be removed");
        assert_eq!(response.total_price, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_line_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .carts
            .expect_update_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::ItemNotFound));

        let mut res = TestClient::put("http://example.com/cart")
            .json(&json!({
                "product_uuid": Uuid::now_v7(),
                "size": "M",
                "color": "White",
                "quantity": 3,
                "guest_id": "guest_abc",
            }))
            .send(&anonymous_service(mocks, route()))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Product not found in cart");

        Ok(())
    }

    #[tokio::test]
    async fn test_without_identity_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.carts.expect_update_item().never();

        let res = TestClient::put("http://example.com/cart")
            .json(&json!({
                "product_uuid": Uuid::now_v7(),
                "size": "M",
                "color": "White",
                "quantity": 3,
            }))
            .send(&anonymous_service(mocks, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
