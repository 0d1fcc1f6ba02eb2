//! User Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::{auth::IssuedToken, domain::users::records::UserRecord};

/// User Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// The unique identifier of the user
    pub uuid: Uuid,

    pub name: String,

    pub email: String,

    /// Either `customer` or `admin`
    pub role: String,

    pub created_at: String,

    pub updated_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            uuid: user.uuid.into(),
            name: user.name,
            email: user.email,
            role: user.role.to_string(),
            created_at: user.created_at.to_string(),
            updated_at: user.updated_at.to_string(),
        }
    }
}

/// Authenticated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AuthenticatedResponse {
    pub user: UserResponse,

    /// Bearer token for subsequent requests
    pub token: String,
}

impl From<IssuedToken> for AuthenticatedResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            user: issued.user.into(),
            token: issued.token,
        }
    }
}
