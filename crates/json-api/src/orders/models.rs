//! Order Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use storefront_app::domain::orders::records::{OrderCustomer, OrderRecord};

use crate::{checkouts::models::ShippingAddressBody, line_items::LineItemBody};

/// The user who placed an order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerBody {
    pub name: String,
    pub email: String,
}

impl From<OrderCustomer> for CustomerBody {
    fn from(customer: OrderCustomer) -> Self {
        Self {
            name: customer.name,
            email: customer.email,
        }
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The checkout session this order was created from
    pub checkout_uuid: Uuid,

    pub user_uuid: Uuid,

    pub customer: CustomerBody,

    pub items: Vec<LineItemBody>,

    pub shipping_address: ShippingAddressBody,

    pub payment_method: String,

    /// Order total in pence/cents
    pub total_price: u64,

    pub is_paid: bool,

    pub paid_at: Option<String>,

    /// `pending`, `paid` or `failed`
    pub payment_status: String,

    /// Gateway payload recorded when the payment was confirmed
    pub payment_details: Option<Value>,

    pub is_delivered: bool,

    pub delivered_at: Option<String>,

    /// `processing`, `shipped`, `delivered` or `cancelled`
    pub status: String,

    /// The date and time the order was placed
    pub created_at: String,

    /// The date and time the order was last updated
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            uuid: order.uuid.into(),
            checkout_uuid: order.checkout_uuid.into(),
            user_uuid: order.user_uuid.into(),
            customer: order.customer.into(),
            items: order.items.into_iter().map(Into::into).collect(),
            shipping_address: order.shipping_address.into(),
            payment_method: order.payment_method,
            total_price: order.total_price,
            is_paid: order.is_paid,
            paid_at: order.paid_at.as_ref().map(ToString::to_string),
            payment_status: order.payment_status.to_string(),
            payment_details: order.payment_details,
            is_delivered: order.is_delivered,
            delivered_at: order.delivered_at.as_ref().map(ToString::to_string),
            status: order.status.to_string(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// The list of orders, most recent first
    pub orders: Vec<OrderResponse>,
}

impl From<Vec<OrderRecord>> for OrdersResponse {
    fn from(orders: Vec<OrderRecord>) -> Self {
        Self {
            orders: orders.into_iter().map(Into::into).collect(),
        }
    }
}
