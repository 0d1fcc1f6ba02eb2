//! Order Data

use jiff::Timestamp;

use crate::domain::{
    checkouts::records::{CheckoutRecord, CheckoutUuid, PaymentStatus, ShippingAddress},
    line_items::LineItem,
    orders::records::{OrderRecord, OrderStatus, OrderUuid},
    users::records::UserUuid,
};

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub checkout_uuid: CheckoutUuid,
    pub user_uuid: UserUuid,
    pub items: Vec<LineItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
    pub total_price: u64,
    pub paid_at: Option<Timestamp>,
    pub payment_details: Option<serde_json::Value>,
}

impl NewOrder {
    /// Copy a paid checkout session into a new order.
    #[must_use]
    pub fn from_checkout(checkout: &CheckoutRecord) -> Self {
        Self {
            uuid: OrderUuid::new(),
            checkout_uuid: checkout.uuid,
            user_uuid: checkout.user_uuid,
            items: checkout.items.clone(),
            shipping_address: checkout.shipping_address.clone(),
            payment_method: checkout.payment_method.clone(),
            total_price: checkout.total_price,
            paid_at: checkout.paid_at,
            payment_details: checkout.payment_details.clone(),
        }
    }

    /// Orders are only ever created from paid sessions.
    #[must_use]
    pub const fn payment_status(&self) -> PaymentStatus {
        PaymentStatus::Paid
    }
}

/// Admin update to an order's fulfilment status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderStatusUpdate {
    pub status: Option<OrderStatus>,
}

impl OrderStatusUpdate {
    /// Apply to `order`. Moving to [`OrderStatus::Delivered`] also stamps delivery.
    pub fn apply(self, order: &mut OrderRecord, now: Timestamp) {
        let Some(status) = self.status else {
            return;
        };

        order.status = status;

        if status == OrderStatus::Delivered {
            order.is_delivered = true;
            order.delivered_at = Some(now);
        }
    }
}
