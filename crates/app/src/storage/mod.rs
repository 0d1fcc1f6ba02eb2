//! Object storage for uploaded files.

use async_trait::async_trait;
use mockall::automock;

mod errors;
mod http;
mod keys;

pub use errors::ObjectStoreError;
pub use http::{HttpObjectStore, StorageConfig};
pub use keys::{ALLOWED_EXTENSIONS, MAX_UPLOAD_BYTES, content_type_for, image_extension, object_key};

#[automock]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under a content-addressed key and return its public URL.
    async fn put(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        extension: &str,
    ) -> Result<String, ObjectStoreError>;
}
