//! Subscribers service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::subscribers::{
        errors::SubscribersServiceError,
        records::{SubscriberRecord, SubscriberUuid},
        repository::PgSubscribersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgSubscribersService {
    db: Db,
    repository: PgSubscribersRepository,
}

impl PgSubscribersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgSubscribersRepository::new(),
        }
    }
}

#[async_trait]
impl SubscribersService for PgSubscribersService {
    async fn subscribe(&self, email: String) -> Result<SubscriberRecord, SubscribersServiceError> {
        let email = email.trim().to_lowercase();

        if email.is_empty() {
            return Err(SubscribersServiceError::MissingEmail);
        }

        let mut tx = self.db.begin().await?;

        let subscriber = self
            .repository
            .create_subscriber(&mut tx, SubscriberUuid::new(), &email)
            .await?;

        tx.commit().await?;

        tracing::info!(subscriber_uuid = %subscriber.uuid, "added newsletter subscriber");

        Ok(subscriber)
    }
}

#[automock]
#[async_trait]
pub trait SubscribersService: Send + Sync {
    /// Subscribe an email address to the newsletter.
    async fn subscribe(&self, email: String) -> Result<SubscriberRecord, SubscribersServiceError>;
}
