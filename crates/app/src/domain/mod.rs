//! Storefront Domain Concerns

pub mod carts;
pub mod checkouts;
pub mod line_items;
pub mod orders;
pub mod products;
pub mod subscribers;
pub mod users;
