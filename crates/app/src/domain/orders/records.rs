//! Order Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    domain::{
        checkouts::records::{CheckoutUuid, PaymentStatus, ShippingAddress},
        line_items::LineItem,
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(UnknownOrderStatus(s.to_string())),
        }
    }
}

/// Name and email of the user who placed an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCustomer {
    pub name: String,
    pub email: String,
}

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub checkout_uuid: CheckoutUuid,
    pub user_uuid: UserUuid,
    pub customer: OrderCustomer,
    pub items: Vec<LineItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
    pub total_price: u64,
    pub is_paid: bool,
    pub paid_at: Option<Timestamp>,
    pub payment_status: PaymentStatus,
    pub payment_details: Option<serde_json::Value>,
    pub is_delivered: bool,
    pub delivered_at: Option<Timestamp>,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_accepts_capitalized_names() {
        assert_eq!("Delivered".parse::<OrderStatus>().ok(), Some(OrderStatus::Delivered));
        assert_eq!("shipped".parse::<OrderStatus>().ok(), Some(OrderStatus::Shipped));
        assert!("lost".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn new_orders_are_processing() {
        assert_eq!(OrderStatus::default(), OrderStatus::Processing);
    }
}
