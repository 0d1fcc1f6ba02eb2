//! Checkout Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::checkouts::{CheckoutValidationError, CheckoutsServiceError};

pub(crate) fn into_status_error(error: CheckoutsServiceError) -> StatusError {
    match error {
        CheckoutsServiceError::NotFound => StatusError::not_found().brief("Checkout not found"),
        CheckoutsServiceError::Invalid(reason) => {
            StatusError::bad_request().brief(validation_message(reason))
        }
        CheckoutsServiceError::PaymentNotSuccessful => {
            StatusError::bad_request().brief("Payment not successful")
        }
        CheckoutsServiceError::NotPaid => StatusError::bad_request().brief("Checkout is not paid"),
        CheckoutsServiceError::AlreadyFinalized => {
            StatusError::bad_request().brief("Checkout already finalized")
        }
        CheckoutsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid checkout payload")
        }
        CheckoutsServiceError::Sql(source) => {
            error!("checkout storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

fn validation_message(reason: CheckoutValidationError) -> &'static str {
    match reason {
        CheckoutValidationError::NoItems => "No items in checkout",
        CheckoutValidationError::ZeroQuantity => "Item quantity must be at least 1",
        CheckoutValidationError::MissingPaymentMethod => "Payment method is required",
        CheckoutValidationError::AmountOutOfRange => "Price is out of range",
    }
}
