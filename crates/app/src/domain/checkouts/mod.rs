//! Checkouts

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::{CheckoutValidationError, CheckoutsServiceError};
pub use service::*;
