//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json};
use uuid::Uuid;

use crate::{
    database::{try_get_amount, try_into_amount},
    domain::{
        carts::records::{CartOwner, CartRecord, CartUuid},
        line_items::LineItem,
        users::records::UserUuid,
    },
};

const GET_USER_CART_SQL: &str = include_str!("sql/get_user_cart.sql");
const GET_GUEST_CART_SQL: &str = include_str!("sql/get_guest_cart.sql");
const LOCK_USER_CART_SQL: &str = include_str!("sql/lock_user_cart.sql");
const LOCK_GUEST_CART_SQL: &str = include_str!("sql/lock_guest_cart.sql");
const INSERT_CART_SQL: &str = include_str!("sql/insert_cart.sql");
const UPDATE_CART_SQL: &str = include_str!("sql/update_cart.sql");
const DELETE_CART_SQL: &str = include_str!("sql/delete_cart.sql");
const DELETE_USER_CART_SQL: &str = include_str!("sql/delete_user_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: &CartOwner,
    ) -> Result<Option<CartRecord>, sqlx::Error> {
        let statement = match owner {
            CartOwner::User(user) => {
                query_as::<Postgres, CartRecord>(GET_USER_CART_SQL).bind(user.into_uuid())
            }
            CartOwner::Guest(guest_id) => {
                query_as::<Postgres, CartRecord>(GET_GUEST_CART_SQL).bind(guest_id.as_str())
            }
        };

        statement.fetch_optional(&mut **tx).await
    }

    /// Read the owner's cart and hold its row lock until the transaction ends.
    pub(crate) async fn lock_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: &CartOwner,
    ) -> Result<Option<CartRecord>, sqlx::Error> {
        let statement = match owner {
            CartOwner::User(user) => {
                query_as::<Postgres, CartRecord>(LOCK_USER_CART_SQL).bind(user.into_uuid())
            }
            CartOwner::Guest(guest_id) => {
                query_as::<Postgres, CartRecord>(LOCK_GUEST_CART_SQL).bind(guest_id.as_str())
            }
        };

        statement.fetch_optional(&mut **tx).await
    }

    /// Insert an empty cart for `owner` unless one already exists. Returns
    /// `true` when this call created it.
    pub(crate) async fn insert_cart_if_absent(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        owner: &CartOwner,
    ) -> Result<bool, sqlx::Error> {
        let rows_affected = query(INSERT_CART_SQL)
            .bind(cart.into_uuid())
            .bind(owner.user().map(UserUuid::into_uuid))
            .bind(owner.guest_id())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    pub(crate) async fn save_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: &CartRecord,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(UPDATE_CART_SQL)
            .bind(cart.uuid.into_uuid())
            .bind(cart.owner.user().map(UserUuid::into_uuid))
            .bind(cart.owner.guest_id())
            .bind(Json(&cart.items))
            .bind(try_into_amount("total_price", cart.total_price)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_user_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_USER_CART_SQL)
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let user_uuid: Option<Uuid> = row.try_get("user_uuid")?;
        let guest_id: Option<String> = row.try_get("guest_id")?;

        let owner = match (user_uuid, guest_id) {
            (Some(user), _) => CartOwner::User(UserUuid::from_uuid(user)),
            (None, Some(guest_id)) => CartOwner::Guest(guest_id),
            (None, None) => return Err(sqlx::Error::Decode("cart has no owner".into())),
        };

        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            owner,
            items: row.try_get::<Json<Vec<LineItem>>, _>("items")?.0,
            total_price: try_get_amount(row, "total_price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
