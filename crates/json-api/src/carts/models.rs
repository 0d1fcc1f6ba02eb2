//! Cart Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::records::CartRecord;

use crate::line_items::LineItemBody;

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// The owning user, for user carts
    pub user_uuid: Option<Uuid>,

    /// The guest identity, for guest carts
    pub guest_id: Option<String>,

    pub items: Vec<LineItemBody>,

    /// Sum of price times quantity over all items, in pence/cents
    pub total_price: u64,

    /// The date and time the cart was created
    pub created_at: String,

    /// The date and time the cart was last updated
    pub updated_at: String,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        Self {
            uuid: cart.uuid.into(),
            user_uuid: cart.owner.user().map(Into::into),
            guest_id: cart.owner.guest_id().map(ToOwned::to_owned),
            items: cart.items.into_iter().map(Into::into).collect(),
            total_price: cart.total_price,
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
        }
    }
}
