//! Cart Data

use crate::domain::{
    carts::records::CartRecord, line_items::LineItemKey, products::records::ProductUuid,
};

/// Add To Cart Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCartItem {
    pub product_uuid: ProductUuid,
    pub size: String,
    pub color: String,
    pub quantity: u32,
}

/// Update Cart Item Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCartItem {
    pub product_uuid: ProductUuid,
    pub size: String,
    pub color: String,
    /// Zero or less removes the line.
    pub quantity: i64,
}

impl UpdateCartItem {
    #[must_use]
    pub fn key(&self) -> LineItemKey<'_> {
        LineItemKey::new(self.product_uuid, &self.size, &self.color)
    }
}

/// Remove Cart Item Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveCartItem {
    pub product_uuid: ProductUuid,
    pub size: String,
    pub color: String,
}

impl RemoveCartItem {
    #[must_use]
    pub fn key(&self) -> LineItemKey<'_> {
        LineItemKey::new(self.product_uuid, &self.size, &self.color)
    }
}

/// The cart after an add, and whether the add created it.
#[derive(Debug, Clone)]
pub struct AddedToCart {
    pub cart: CartRecord,
    pub created: bool,
}
