//! Checkout Handlers

pub(crate) mod create;
pub(crate) mod finalize;
pub(crate) mod get;
pub(crate) mod pay;
