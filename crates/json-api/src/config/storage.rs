//! Storage Config

use std::fmt;

use clap::Args;

use storefront_app::storage::StorageConfig;

/// Object storage settings for uploaded images.
#[derive(Args)]
pub struct ObjectStorageConfig {
    /// Base URL uploads are PUT to
    #[arg(long, env = "STORAGE_ENDPOINT")]
    pub storage_endpoint: String,

    /// Bearer token sent with each upload
    #[arg(long, env = "STORAGE_TOKEN", hide_env_values = true)]
    pub storage_token: String,

    /// Base URL uploaded objects are publicly served from
    #[arg(long, env = "STORAGE_PUBLIC_URL")]
    pub storage_public_url: String,
}

impl ObjectStorageConfig {
    #[must_use]
    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig {
            endpoint: self.storage_endpoint.clone(),
            token: self.storage_token.clone(),
            public_url: self.storage_public_url.clone(),
        }
    }
}

impl fmt::Debug for ObjectStorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectStorageConfig")
            .field("storage_endpoint", &self.storage_endpoint)
            .field("storage_token", &"**redacted**")
            .field("storage_public_url", &self.storage_public_url)
            .finish()
    }
}
