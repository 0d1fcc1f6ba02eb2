//! Subscribers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::subscribers::records::{SubscriberRecord, SubscriberUuid};

const CREATE_SUBSCRIBER_SQL: &str = include_str!("sql/create_subscriber.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSubscribersRepository;

impl PgSubscribersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_subscriber(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: SubscriberUuid,
        email: &str,
    ) -> Result<SubscriberRecord, sqlx::Error> {
        query_as::<Postgres, SubscriberRecord>(CREATE_SUBSCRIBER_SQL)
            .bind(uuid.into_uuid())
            .bind(email)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SubscriberRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: SubscriberUuid::from_uuid(row.try_get("uuid")?),
            email: row.try_get("email")?,
            subscribed_at: row.try_get::<SqlxTimestamp, _>("subscribed_at")?.to_jiff(),
        })
    }
}
