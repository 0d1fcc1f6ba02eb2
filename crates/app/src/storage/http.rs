//! HTTP object store client.

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};

use crate::storage::{MAX_UPLOAD_BYTES, ObjectStore, ObjectStoreError, object_key};

/// Configuration for an S3-style object store reachable over plain HTTP PUTs.
#[derive(Clone)]
pub struct StorageConfig {
    /// Base URL objects are PUT to, e.g. `"http://localhost:9000/storefront"`.
    pub endpoint: String,

    /// Bearer token sent with every upload.
    pub token: String,

    /// Base URL objects are publicly served from.
    pub public_url: String,
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &"**redacted**")
            .field("public_url", &self.public_url)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct HttpObjectStore {
    config: StorageConfig,
    http: Client,
}

impl HttpObjectStore {
    #[must_use]
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(base: &str, key: &str) -> String {
        format!("{}/{key}", base.trim_end_matches('/'))
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn put(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        extension: &str,
    ) -> Result<String, ObjectStoreError> {
        if bytes.is_empty() {
            return Err(ObjectStoreError::Empty);
        }

        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(ObjectStoreError::TooLarge {
                size: bytes.len(),
                limit: MAX_UPLOAD_BYTES,
            });
        }

        let key = object_key(&bytes, extension);

        let response = self
            .http
            .put(Self::url(&self.config.endpoint, &key))
            .bearer_auth(&self.config.token)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ObjectStoreError::UnexpectedResponse(format!(
                "upload failed with status {status}: {text}"
            )));
        }

        tracing::info!(object_key = %key, "stored object");

        Ok(Self::url(&self.config.public_url, &key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slashes() {
        assert_eq!(
            HttpObjectStore::url("https://cdn.example.com/", "uploads/a.png"),
            "https://cdn.example.com/uploads/a.png"
        );
        assert_eq!(
            HttpObjectStore::url("https://cdn.example.com", "uploads/a.png"),
            "https://cdn.example.com/uploads/a.png"
        );
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = StorageConfig {
            endpoint: "http://localhost:9000".to_string(),
            token: "secret-token".to_string(),
            public_url: "http://localhost:9000".to_string(),
        };

        assert!(!format!("{config:?}").contains("secret-token"));
    }

    #[tokio::test]
    async fn empty_uploads_are_rejected_before_any_request() {
        let store = HttpObjectStore::new(StorageConfig {
            endpoint: "http://127.0.0.1:9".to_string(),
            token: String::new(),
            public_url: String::new(),
        });

        let result = store.put(Vec::new(), "image/png", "png").await;

        assert!(
            matches!(result, Err(ObjectStoreError::Empty)),
            "expected Empty, got {result:?}"
        );
    }

    #[tokio::test]
    async fn oversized_uploads_are_rejected_before_any_request() {
        let store = HttpObjectStore::new(StorageConfig {
            endpoint: "http://127.0.0.1:9".to_string(),
            token: String::new(),
            public_url: String::new(),
        });

        let result = store
            .put(vec![0; MAX_UPLOAD_BYTES + 1], "image/png", "png")
            .await;

        assert!(
            matches!(result, Err(ObjectStoreError::TooLarge { .. })),
            "expected TooLarge, got {result:?}"
        );
    }
}
