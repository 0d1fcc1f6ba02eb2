//! Subscriber Handlers

pub(crate) mod create;
