//! Line item bodies shared by carts, checkouts and orders.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{line_items::LineItem, products::records::ProductUuid};

/// Line Item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemBody {
    /// The product this line is a snapshot of
    pub product_uuid: Uuid,

    pub name: String,

    /// Image URL, empty when the product had no images
    #[serde(default)]
    pub image: String,

    /// Unit price in pence/cents at the time the line was added
    pub price: u64,

    pub size: String,

    pub color: String,

    pub quantity: u32,
}

impl From<LineItem> for LineItemBody {
    fn from(item: LineItem) -> Self {
        Self {
            product_uuid: item.product_uuid.into(),
            name: item.name,
            image: item.image,
            price: item.price,
            size: item.size,
            color: item.color,
            quantity: item.quantity,
        }
    }
}

impl From<LineItemBody> for LineItem {
    fn from(item: LineItemBody) -> Self {
        LineItem {
            product_uuid: ProductUuid::from_uuid(item.product_uuid),
            name: item.name,
            image: item.image,
            price: item.price,
            size: item.size,
            color: item.color,
            quantity: item.quantity,
        }
    }
}
