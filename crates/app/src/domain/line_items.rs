//! Line Items
//!
//! A line item is a denormalized snapshot of a product as it was when it was
//! added to a cart. Carts, checkouts and orders all store the same shape.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::domain::products::records::ProductUuid;

/// Largest amount, in minor units, that a `BIGINT` money column can hold.
pub const MAX_AMOUNT: u64 = i64::MAX.unsigned_abs();

/// Line Item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub image: String,
    pub price: u64,
    pub size: String,
    pub color: String,
    pub quantity: u32,
}

impl LineItem {
    /// The identity of this line within a cart.
    #[must_use]
    pub fn key(&self) -> LineItemKey<'_> {
        LineItemKey {
            product_uuid: self.product_uuid,
            size: &self.size,
            color: &self.color,
        }
    }

    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// `(product, size, color)`: no two lines of a cart share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineItemKey<'a> {
    pub product_uuid: ProductUuid,
    pub size: &'a str,
    pub color: &'a str,
}

impl<'a> LineItemKey<'a> {
    #[must_use]
    pub fn new(product_uuid: ProductUuid, size: &'a str, color: &'a str) -> Self {
        Self {
            product_uuid,
            size,
            color,
        }
    }
}

/// Sum of `price * quantity` over all lines.
#[must_use]
pub fn total_price(items: &[LineItem]) -> u64 {
    items
        .iter()
        .map(LineItem::subtotal)
        .fold(0, u64::saturating_add)
}

/// Merge `incoming` into `items`: matching lines have their quantities summed,
/// the rest are appended in their original order.
pub fn merge_line_items(items: &mut Vec<LineItem>, incoming: Vec<LineItem>) {
    let mut index: FxHashMap<(ProductUuid, String, String), usize> = items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            (
                (item.product_uuid, item.size.clone(), item.color.clone()),
                position,
            )
        })
        .collect();

    for item in incoming {
        let key = (item.product_uuid, item.size.clone(), item.color.clone());

        match index.get(&key).and_then(|position| items.get_mut(*position)) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => {
                index.insert(key, items.len());
                items.push(item);
            }
        }
    }
}
