//! Checkout Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use storefront_app::domain::checkouts::records::{CheckoutRecord, ShippingAddress};

use crate::line_items::LineItemBody;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingAddressBody {
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl From<ShippingAddress> for ShippingAddressBody {
    fn from(address: ShippingAddress) -> Self {
        Self {
            address: address.address,
            city: address.city,
            postal_code: address.postal_code,
            country: address.country,
        }
    }
}

impl From<ShippingAddressBody> for ShippingAddress {
    fn from(address: ShippingAddressBody) -> Self {
        ShippingAddress {
            address: address.address,
            city: address.city,
            postal_code: address.postal_code,
            country: address.country,
        }
    }
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// The unique identifier of the checkout session
    pub uuid: Uuid,

    pub user_uuid: Uuid,

    pub items: Vec<LineItemBody>,

    pub shipping_address: ShippingAddressBody,

    pub payment_method: String,

    /// Session total in pence/cents
    pub total_price: u64,

    /// `pending`, `paid` or `failed`
    pub payment_status: String,

    pub is_paid: bool,

    pub paid_at: Option<String>,

    pub payment_details: Option<Value>,

    pub is_finalized: bool,

    pub finalized_at: Option<String>,

    /// The date and time the session was opened
    pub created_at: String,

    /// The date and time the session was last updated
    pub updated_at: String,
}

impl From<CheckoutRecord> for CheckoutResponse {
    fn from(checkout: CheckoutRecord) -> Self {
        Self {
            uuid: checkout.uuid.into(),
            user_uuid: checkout.user_uuid.into(),
            items: checkout.items.into_iter().map(Into::into).collect(),
            shipping_address: checkout.shipping_address.into(),
            payment_method: checkout.payment_method,
            total_price: checkout.total_price,
            payment_status: checkout.payment_status.to_string(),
            is_paid: checkout.is_paid,
            paid_at: checkout.paid_at.as_ref().map(ToString::to_string),
            payment_details: checkout.payment_details,
            is_finalized: checkout.is_finalized,
            finalized_at: checkout.finalized_at.as_ref().map(ToString::to_string),
            created_at: checkout.created_at.to_string(),
            updated_at: checkout.updated_at.to_string(),
        }
    }
}
