//! Bearer token issuance and verification.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::users::records::{Role, UserUuid};

/// Default token lifetime.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

/// JWT signing settings.
#[derive(Clone)]
pub struct JwtConfig {
    /// Shared HMAC secret.
    pub secret: String,

    /// Token lifetime in minutes.
    pub expiration_minutes: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"**redacted**")
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

/// Claims carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User UUID.
    pub sub: Uuid,

    /// Role at the time of issue.
    pub role: String,

    /// Issued at, in seconds since the epoch.
    pub iat: i64,

    /// Expires at, in seconds since the epoch.
    pub exp: i64,
}

impl Claims {
    #[must_use]
    pub fn user_uuid(&self) -> UserUuid {
        UserUuid::from_uuid(self.sub)
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token is invalid")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// HS256 signer and verifier for bearer tokens.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: SignedDuration,
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenSigner {
    #[must_use]
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            ttl: SignedDuration::from_mins(config.expiration_minutes),
        }
    }

    /// Sign a token for `user`, valid from now.
    ///
    /// # Errors
    ///
    /// Returns an error when the claims cannot be signed.
    pub fn issue(&self, user: UserUuid, role: Role) -> Result<String, TokenError> {
        self.issue_at(user, role, Timestamp::now())
    }

    pub(crate) fn issue_at(
        &self,
        user: UserUuid,
        role: Role,
        now: Timestamp,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user.into_uuid(),
            role: role.as_str().to_string(),
            iat: now.as_second(),
            exp: now.as_second().saturating_add(self.ttl.as_secs()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Signing)
    }

    /// Check the signature and expiry of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Expired`] for stale tokens and
    /// [`TokenError::Invalid`] for anything else that fails verification.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|error| match error.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(error),
            })
    }
}
