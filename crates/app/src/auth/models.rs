//! Auth data models.

use crate::domain::users::records::{Role, UserRecord, UserUuid};

/// The caller behind a verified bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub uuid: UserUuid,
    pub role: Role,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<&UserRecord> for AuthenticatedUser {
    fn from(user: &UserRecord) -> Self {
        Self {
            uuid: user.uuid,
            role: user.role,
        }
    }
}

/// Self-service registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A signed bearer token and the user it was issued to.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub user: UserRecord,
}
