//! Cart Records

use jiff::Timestamp;
use uuid::Uuid;

use crate::{
    domain::{
        line_items::{LineItem, LineItemKey, merge_line_items, total_price},
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Who a cart belongs to. A cart has exactly one owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CartOwner {
    User(UserUuid),
    Guest(String),
}

impl CartOwner {
    /// Pick the cart identity for a request. A user takes precedence over a
    /// guest id; blank guest ids are ignored.
    #[must_use]
    pub fn resolve(user: Option<UserUuid>, guest_id: Option<&str>) -> Option<Self> {
        if let Some(user) = user {
            return Some(Self::User(user));
        }

        guest_id
            .map(str::trim)
            .filter(|guest_id| !guest_id.is_empty())
            .map(|guest_id| Self::Guest(guest_id.to_string()))
    }

    /// A freshly generated guest identity.
    #[must_use]
    pub fn new_guest() -> Self {
        Self::Guest(format!("guest_{}", Uuid::now_v7().simple()))
    }

    #[must_use]
    pub fn user(&self) -> Option<UserUuid> {
        match self {
            Self::User(user) => Some(*user),
            Self::Guest(_) => None,
        }
    }

    #[must_use]
    pub fn guest_id(&self) -> Option<&str> {
        match self {
            Self::User(_) => None,
            Self::Guest(guest_id) => Some(guest_id),
        }
    }
}

/// Cart Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub owner: CartOwner,
    pub items: Vec<LineItem>,
    pub total_price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartRecord {
    /// Add a line, incrementing the quantity of a matching one.
    pub fn add(&mut self, item: LineItem) {
        merge_line_items(&mut self.items, vec![item]);
        self.recompute_total();
    }

    /// Set the quantity of a line, removing it when `quantity` is zero or
    /// negative. Returns `false` when no such line exists.
    pub fn set_quantity(&mut self, key: LineItemKey<'_>, quantity: i64) -> bool {
        let Some(position) = self.position(key) else {
            return false;
        };

        if quantity <= 0 {
            self.items.remove(position);
        } else if let Some(item) = self.items.get_mut(position) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }

        self.recompute_total();

        true
    }

    /// Remove a line. Returns `false` when no such line exists.
    pub fn remove(&mut self, key: LineItemKey<'_>) -> bool {
        let Some(position) = self.position(key) else {
            return false;
        };

        self.items.remove(position);
        self.recompute_total();

        true
    }

    /// Fold another cart's lines into this one.
    pub fn absorb(&mut self, items: Vec<LineItem>) {
        merge_line_items(&mut self.items, items);
        self.recompute_total();
    }

    fn position(&self, key: LineItemKey<'_>) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    fn recompute_total(&mut self) {
        self.total_price = total_price(&self.items);
    }
}
