//! Auth Config

use std::fmt;

use clap::Args;

use storefront_app::auth::{DEFAULT_TOKEN_TTL_MINUTES, JwtConfig};

/// Bearer token settings.
#[derive(Args)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify bearer tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Lifetime of issued tokens, in minutes
    #[arg(long, env = "JWT_EXPIRATION_MINUTES", default_value_t = DEFAULT_TOKEN_TTL_MINUTES)]
    pub jwt_expiration_minutes: i64,
}

impl AuthConfig {
    #[must_use]
    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.jwt_secret.clone(),
            expiration_minutes: self.jwt_expiration_minutes,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"**redacted**")
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .finish()
    }
}
