//! Checkout Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{line_items::LineItem, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Checkout UUID
pub type CheckoutUuid = TypedUuid<CheckoutRecord>;

/// Payment Status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown payment status: {0}")]
pub struct UnknownPaymentStatus(pub String);

impl FromStr for PaymentStatus {
    type Err = UnknownPaymentStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "failed" => Ok(Self::Failed),
            _ => Err(UnknownPaymentStatus(s.to_string())),
        }
    }
}

/// Shipping Address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Where a checkout session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Pending,
    Paid,
    Finalized,
}

/// Checkout Record
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRecord {
    pub uuid: CheckoutUuid,
    pub user_uuid: UserUuid,
    pub items: Vec<LineItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
    pub total_price: u64,
    pub payment_status: PaymentStatus,
    pub is_paid: bool,
    pub paid_at: Option<Timestamp>,
    pub payment_details: Option<serde_json::Value>,
    pub is_finalized: bool,
    pub finalized_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CheckoutRecord {
    #[must_use]
    pub fn state(&self) -> CheckoutState {
        if self.is_finalized {
            CheckoutState::Finalized
        } else if self.is_paid {
            CheckoutState::Paid
        } else {
            CheckoutState::Pending
        }
    }
}
