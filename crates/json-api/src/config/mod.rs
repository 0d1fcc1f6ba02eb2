//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    storage::ObjectStorageConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod storage;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Bearer token settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Upload storage settings.
    #[command(flatten)]
    pub storage: ObjectStorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    const REQUIRED: [&str; 9] = [
        "storefront-json",
        "--database-url",
        "postgres://localhost/storefront",
        "--jwt-secret",
        "s3cret",
        "--storage-endpoint",
        "http://localhost:9000/bucket",
        "--storage-token",
        "token",
    ];

    #[test]
    fn defaults_apply_when_only_required_values_are_given() -> TestResult {
        let mut args = REQUIRED.to_vec();
        args.extend(["--storage-public-url", "https://cdn.example.com"]);

        let config = ServerConfig::try_parse_from(args)?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8000");
        assert_eq!(config.auth.jwt_expiration_minutes, 60);
        assert!(!config.database.run_migrations);
        assert!(!config.observability.otel_enabled);
        assert_eq!(config.storage.storage_public_url, "https://cdn.example.com");

        Ok(())
    }

    #[test]
    fn jwt_expiration_can_be_overridden() -> TestResult {
        let mut args = REQUIRED.to_vec();
        args.extend([
            "--storage-public-url",
            "https://cdn.example.com",
            "--jwt-expiration-minutes",
            "15",
        ]);

        let config = ServerConfig::try_parse_from(args)?;

        assert_eq!(config.auth.jwt_config().expiration_minutes, 15);

        Ok(())
    }
}
