//! Order Handlers

pub(crate) mod admin_delete;
pub(crate) mod admin_index;
pub(crate) mod admin_update;
pub(crate) mod get;
pub(crate) mod mine;
