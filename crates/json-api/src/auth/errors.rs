//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::InvalidToken(_) | AuthServiceError::UserNotFound => {
            StatusError::unauthorized().brief("Not authorized, token failed")
        }
        AuthServiceError::InvalidCredentials => {
            StatusError::bad_request().brief("Invalid email or password")
        }
        AuthServiceError::UserAlreadyExists => {
            StatusError::bad_request().brief("User already exists")
        }
        AuthServiceError::Invalid(source) => StatusError::bad_request().brief(source.to_string()),
        AuthServiceError::PasswordHash(source) => {
            error!("failed to hash password: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Issue(source) => {
            error!("failed to issue token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Sql(source) => {
            error!("failed to authenticate: {source}");

            StatusError::internal_server_error()
        }
    }
}
