//! Checkouts Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, types::Json};

use crate::{
    database::{try_get_amount, try_into_amount},
    domain::{
        checkouts::{
            data::NewCheckout,
            records::{CheckoutRecord, CheckoutUuid, PaymentStatus, ShippingAddress},
        },
        line_items::LineItem,
        users::records::UserUuid,
    },
};

const CREATE_CHECKOUT_SQL: &str = include_str!("sql/create_checkout.sql");
const GET_USER_CHECKOUT_SQL: &str = include_str!("sql/get_user_checkout.sql");
const LOCK_USER_CHECKOUT_SQL: &str = include_str!("sql/lock_user_checkout.sql");
const RECORD_PAYMENT_SQL: &str = include_str!("sql/record_payment.sql");
const MARK_FINALIZED_SQL: &str = include_str!("sql/mark_finalized.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCheckoutsRepository;

impl PgCheckoutsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_checkout(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        checkout: &NewCheckout,
    ) -> Result<CheckoutRecord, sqlx::Error> {
        query_as::<Postgres, CheckoutRecord>(CREATE_CHECKOUT_SQL)
            .bind(checkout.uuid.into_uuid())
            .bind(user.into_uuid())
            .bind(Json(&checkout.items))
            .bind(Json(&checkout.shipping_address))
            .bind(&checkout.payment_method)
            .bind(try_into_amount("total_price", checkout.total_price)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_checkout(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        checkout: CheckoutUuid,
    ) -> Result<CheckoutRecord, sqlx::Error> {
        query_as::<Postgres, CheckoutRecord>(GET_USER_CHECKOUT_SQL)
            .bind(checkout.into_uuid())
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn lock_checkout(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        checkout: CheckoutUuid,
    ) -> Result<CheckoutRecord, sqlx::Error> {
        query_as::<Postgres, CheckoutRecord>(LOCK_USER_CHECKOUT_SQL)
            .bind(checkout.into_uuid())
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn record_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        checkout: CheckoutUuid,
        paid_at: Timestamp,
        payment_details: Option<&serde_json::Value>,
    ) -> Result<CheckoutRecord, sqlx::Error> {
        query_as::<Postgres, CheckoutRecord>(RECORD_PAYMENT_SQL)
            .bind(checkout.into_uuid())
            .bind(PaymentStatus::Paid.as_str())
            .bind(SqlxTimestamp::from(paid_at))
            .bind(payment_details.map(Json))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn mark_finalized(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        checkout: CheckoutUuid,
        finalized_at: Timestamp,
    ) -> Result<CheckoutRecord, sqlx::Error> {
        query_as::<Postgres, CheckoutRecord>(MARK_FINALIZED_SQL)
            .bind(checkout.into_uuid())
            .bind(SqlxTimestamp::from(finalized_at))
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CheckoutRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let payment_status: String = row.try_get("payment_status")?;

        Ok(Self {
            uuid: CheckoutUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            items: row.try_get::<Json<Vec<LineItem>>, _>("items")?.0,
            shipping_address: row
                .try_get::<Json<ShippingAddress>, _>("shipping_address")?
                .0,
            payment_method: row.try_get("payment_method")?,
            total_price: try_get_amount(row, "total_price")?,
            payment_status: payment_status
                .parse()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "payment_status".to_string(),
                    source: Box::new(e),
                })?,
            is_paid: row.try_get("is_paid")?,
            paid_at: row
                .try_get::<Option<SqlxTimestamp>, _>("paid_at")?
                .map(SqlxTimestamp::to_jiff),
            payment_details: row
                .try_get::<Option<Json<serde_json::Value>>, _>("payment_details")?
                .map(|details| details.0),
            is_finalized: row.try_get("is_finalized")?,
            finalized_at: row
                .try_get::<Option<SqlxTimestamp>, _>("finalized_at")?
                .map(SqlxTimestamp::to_jiff),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
