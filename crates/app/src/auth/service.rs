//! Auth service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::{
        AuthServiceError, AuthenticatedUser, Credentials, IssuedToken, JwtConfig, Registration,
        TokenSigner, passwords,
    },
    database::Db,
    domain::users::{
        data::{NewUser, normalize_email},
        records::{Role, UserRecord, UserUuid},
        repository::{NewUserRow, PgUsersRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    signer: TokenSigner,
    users: PgUsersRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db, jwt: &JwtConfig) -> Self {
        Self {
            db,
            signer: TokenSigner::new(jwt),
            users: PgUsersRepository::new(),
        }
    }

    fn issue(&self, user: UserRecord) -> Result<IssuedToken, AuthServiceError> {
        let token = self
            .signer
            .issue(user.uuid, user.role)
            .map_err(AuthServiceError::Issue)?;

        Ok(IssuedToken { token, user })
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticatedUser, AuthServiceError> {
        let claims = self
            .signer
            .verify(bearer_token)
            .map_err(AuthServiceError::InvalidToken)?;

        let mut tx = self.db.begin().await?;

        let user = match self.users.get_user(&mut tx, claims.user_uuid()).await {
            Ok(user) => user,
            Err(sqlx::Error::RowNotFound) => return Err(AuthServiceError::UserNotFound),
            Err(error) => return Err(error.into()),
        };

        tx.commit().await?;

        Ok(AuthenticatedUser::from(&user))
    }

    async fn register(&self, registration: Registration) -> Result<IssuedToken, AuthServiceError> {
        let user = NewUser {
            uuid: UserUuid::new(),
            name: registration.name,
            email: registration.email,
            password: registration.password,
            role: Role::Customer,
        }
        .normalized()?;

        let password_hash =
            passwords::hash_password(&user.password).map_err(AuthServiceError::PasswordHash)?;

        let mut tx = self.db.begin().await?;

        let created = self
            .users
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

        tracing::info!(user_uuid = %created.uuid, "registered user");

        self.issue(created)
    }

    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, AuthServiceError> {
        let email =
            normalize_email(&credentials.email).map_err(|_| AuthServiceError::InvalidCredentials)?;

        let mut tx = self.db.begin().await?;

        let stored = self
            .users
            .find_credentials_by_email(&mut tx, &email)
            .await?;

        tx.commit().await?;

        let verified = passwords::verify_stored_password(
            &credentials.password,
            stored.as_ref().map(|stored| stored.password_hash.as_str()),
        );

        match stored {
            Some(stored) if verified => self.issue(stored.user),
            Some(_) | None => Err(AuthServiceError::InvalidCredentials),
        }
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify a bearer token and load the user it names.
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticatedUser, AuthServiceError>;

    /// Create a customer account and sign a token for it.
    async fn register(&self, registration: Registration) -> Result<IssuedToken, AuthServiceError>;

    /// Check an email and password pair and sign a token on success.
    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, AuthServiceError>;
}
