//! Admin Update Order Handler

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

use storefront_app::domain::orders::{
    data::OrderStatusUpdate,
    records::{OrderStatus, OrderUuid},
};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Update Order Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderRequest {
    /// `processing`, `shipped`, `delivered` or `cancelled`; case-insensitive
    pub status: Option<String>,
}

impl TryFrom<UpdateOrderRequest> for OrderStatusUpdate {
    type Error = StatusError;

    fn try_from(request: UpdateOrderRequest) -> Result<Self, Self::Error> {
        Ok(OrderStatusUpdate {
            status: request
                .status
                .as_deref()
                .map(str::parse::<OrderStatus>)
                .transpose()
                .or_400("Invalid order status")?,
        })
    }
}

/// Admin Update Order Handler
///
/// Changes an order's status. Marking it delivered also records the delivery
/// time. Admin only.
#[endpoint(
    tags("admin"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid order status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.update_status",
    skip(order, json, depot),
    fields(order_uuid = tracing::field::Empty, status = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order = OrderUuid::from_uuid(order.into_inner());
    let update = OrderStatusUpdate::try_from(json.into_inner())?;

    let span = tracing::Span::current();

    span.record("order_uuid", tracing::field::display(order));

    if let Some(status) = update.status {
        span.record("status", tracing::field::display(status));
    }

    let order = state
        .app
        .orders
        .update_status(order, update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::{orders::OrdersServiceError, orders::records::OrderRecord};

    use crate::test_helpers::{CUSTOMER, Mocks, admin_service, make_order};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        admin_service(mocks, Router::with_path("admin/orders/{order}").put(handler))
    }

    #[tokio::test]
    async fn test_mark_delivered() -> TestResult {
        let mut mocks = Mocks::default();
        let uuid = OrderUuid::new();

        mocks
            .orders
            .expect_update_status()
            .once()
            .withf(move |order, update| {
                *order == uuid && update.status == Some(OrderStatus::Delivered)
            })
            .return_once(|order, _| {
                Ok(OrderRecord {
                    status: OrderStatus::Delivered,
                    is_delivered: true,
                    delivered_at: Some(Timestamp::UNIX_EPOCH),
                    ..make_order(order, CUSTOMER.uuid)
                })
            });

        let mut res = TestClient::put(format!("http://example.com/admin/orders/{uuid}"))
            .json(&json!({ "status": "Delivered" }))
            .send(&make_service(mocks))
            .await;

        let response: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(response.status, "delivered");
        assert!(response.is_delivered, "order should be delivered");
        assert!(response.delivered_at.is_some(), "delivery should be stamped");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_status_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.orders.expect_update_status().never();

        let res = TestClient::put(format!("http://example.com/admin/orders/{}", Uuid::now_v7()))
            .json(&json!({ "status": "lost" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_order_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_update_status()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/admin/orders/{}", Uuid::now_v7()))
            .json(&json!({ "status": "shipped" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
