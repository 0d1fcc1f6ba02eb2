//! Checkouts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutValidationError {
    #[error("no items in checkout")]
    NoItems,

    #[error("item quantity must be at least 1")]
    ZeroQuantity,

    #[error("payment method is required")]
    MissingPaymentMethod,

    #[error("amount exceeds the largest storable price")]
    AmountOutOfRange,
}

#[derive(Debug, Error)]
pub enum CheckoutsServiceError {
    #[error("checkout not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] CheckoutValidationError),

    #[error("payment not successful")]
    PaymentNotSuccessful,

    #[error("checkout is not paid")]
    NotPaid,

    #[error("checkout already finalized")]
    AlreadyFinalized,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CheckoutsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(_) | None => Self::Sql(error),
        }
    }
}
