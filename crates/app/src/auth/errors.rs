//! Auth service errors.

use sqlx::Error;
use thiserror::Error;

use crate::{
    auth::TokenError,
    database::is_unique_violation,
    domain::users::UserValidationError,
};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("invalid token")]
    InvalidToken(#[source] TokenError),

    #[error("user not found")]
    UserNotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error(transparent)]
    Invalid(#[from] UserValidationError),

    #[error("failed to hash password")]
    PasswordHash(#[source] argon2::password_hash::Error),

    #[error("failed to issue token")]
    Issue(#[source] TokenError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        if is_unique_violation(&error) {
            return Self::UserAlreadyExists;
        }

        Self::Sql(error)
    }
}
