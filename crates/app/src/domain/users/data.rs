//! User Data

use crate::domain::users::{
    errors::UserValidationError,
    records::{Role, UserUuid},
};

pub(crate) const MIN_PASSWORD_LENGTH: usize = 6;

/// New User Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl NewUser {
    /// Trim the name, normalize the email and check the password length.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn normalized(self) -> Result<Self, UserValidationError> {
        let name = self.name.trim().to_string();

        if name.is_empty() {
            return Err(UserValidationError::MissingName);
        }

        let email = normalize_email(&self.email)?;

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserValidationError::PasswordTooShort);
        }

        Ok(Self {
            name,
            email,
            ..self
        })
    }
}

/// User Update Data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

/// Lowercase and trim an email address, rejecting obviously malformed ones.
///
/// # Errors
///
/// Returns [`UserValidationError::InvalidEmail`] when no `local@domain` shape is found.
pub fn normalize_email(email: &str) -> Result<String, UserValidationError> {
    let email = email.trim().to_lowercase();

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(UserValidationError::InvalidEmail),
    }
}
