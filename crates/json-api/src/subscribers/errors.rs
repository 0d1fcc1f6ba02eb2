//! Subscriber Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::subscribers::SubscribersServiceError;

pub(crate) fn into_status_error(error: SubscribersServiceError) -> StatusError {
    match error {
        SubscribersServiceError::MissingEmail => {
            StatusError::bad_request().brief("Email is required")
        }
        SubscribersServiceError::AlreadySubscribed => {
            StatusError::bad_request().brief("Email is already subscribed")
        }
        SubscribersServiceError::Sql(source) => {
            error!("subscriber storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
