//! Users service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::passwords,
    database::Db,
    domain::users::{
        data::{NewUser, UserUpdate, normalize_email},
        errors::{UserValidationError, UsersServiceError},
        records::{UserRecord, UserUuid},
        repository::{NewUserRow, PgUsersRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let users = self.repository.list_users(&mut tx).await?;

        tx.commit().await?;

        Ok(users)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        let user = user.normalized()?;

        let password_hash =
            passwords::hash_password(&user.password).map_err(UsersServiceError::PasswordHash)?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_user(
                &mut tx,
                NewUserRow {
                    uuid: user.uuid,
                    name: &user.name,
                    email: &user.email,
                    password_hash: &password_hash,
                    role: user.role,
                },
            )
            .await?;

        tx.commit().await?;

        tracing::info!(user_uuid = %created.uuid, role = %created.role, "created user");

        Ok(created)
    }

    async fn update_user(
        &self,
        user: UserUuid,
        update: UserUpdate,
    ) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut record = self.repository.lock_user(&mut tx, user).await?;

        if let Some(name) = update.name {
            let name = name.trim();

            if name.is_empty() {
                return Err(UserValidationError::MissingName.into());
            }

            name.clone_into(&mut record.name);
        }

        if let Some(email) = update.email {
            record.email = normalize_email(&email)?;
        }

        if let Some(role) = update.role {
            record.role = role;
        }

        let updated = self.repository.save_user(&mut tx, &record).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_user(&self, user: UserUuid) -> Result<(), UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_user(&mut tx, user).await?;

        if rows_affected == 0 {
            return Err(UsersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieves all users, newest first.
    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;

    /// Creates a user with a hashed password.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Applies a partial update to a user.
    async fn update_user(
        &self,
        user: UserUuid,
        update: UserUpdate,
    ) -> Result<UserRecord, UsersServiceError>;

    /// Deletes a user with the given UUID.
    async fn delete_user(&self, user: UserUuid) -> Result<(), UsersServiceError>;
}
