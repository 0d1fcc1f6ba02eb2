//! Subscribers service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubscribersServiceError {
    #[error("email is required")]
    MissingEmail,

    #[error("email is already subscribed")]
    AlreadySubscribed,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for SubscribersServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadySubscribed,
            Some(_) | None => Self::Sql(error),
        }
    }
}
