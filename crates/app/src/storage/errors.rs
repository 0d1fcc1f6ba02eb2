//! Object store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjectStoreError {
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),

    #[error("file is too large ({size} bytes, limit {limit})")]
    TooLarge { size: usize, limit: usize },

    #[error("file is empty")]
    Empty,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from object store: {0}")]
    UnexpectedResponse(String),
}
