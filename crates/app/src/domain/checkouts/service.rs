//! Checkouts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::{Db, is_unique_violation},
    domain::{
        carts::repository::PgCartsRepository,
        checkouts::{
            data::{NewCheckout, PaymentConfirmation},
            errors::CheckoutsServiceError,
            records::{CheckoutRecord, CheckoutState, CheckoutUuid},
            repository::PgCheckoutsRepository,
        },
        orders::{data::NewOrder, records::OrderRecord, repository::PgOrdersRepository},
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCheckoutsService {
    db: Db,
    checkouts_repository: PgCheckoutsRepository,
    orders_repository: PgOrdersRepository,
    carts_repository: PgCartsRepository,
}

impl PgCheckoutsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            checkouts_repository: PgCheckoutsRepository::new(),
            orders_repository: PgOrdersRepository::new(),
            carts_repository: PgCartsRepository::new(),
        }
    }
}

#[async_trait]
impl CheckoutsService for PgCheckoutsService {
    async fn create_checkout(
        &self,
        user: UserUuid,
        checkout: NewCheckout,
    ) -> Result<CheckoutRecord, CheckoutsServiceError> {
        checkout.validate()?;

        let mut tx = self.db.begin().await?;

        let created = self
            .checkouts_repository
            .create_checkout(&mut tx, user, &checkout)
            .await?;

        tx.commit().await?;

        tracing::info!(checkout_uuid = %created.uuid, user_uuid = %user, "created checkout");

        Ok(created)
    }

    async fn get_checkout(
        &self,
        user: UserUuid,
        checkout: CheckoutUuid,
    ) -> Result<CheckoutRecord, CheckoutsServiceError> {
        let mut tx = self.db.begin().await?;

        let checkout = self
            .checkouts_repository
            .get_checkout(&mut tx, user, checkout)
            .await?;

        tx.commit().await?;

        Ok(checkout)
    }

    async fn confirm_payment(
        &self,
        user: UserUuid,
        checkout: CheckoutUuid,
        confirmation: PaymentConfirmation,
    ) -> Result<CheckoutRecord, CheckoutsServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self
            .checkouts_repository
            .lock_checkout(&mut tx, user, checkout)
            .await?;

        match current.state() {
            CheckoutState::Finalized => return Err(CheckoutsServiceError::AlreadyFinalized),
            _ if !confirmation.is_successful() => {
                return Err(CheckoutsServiceError::PaymentNotSuccessful);
            }
            CheckoutState::Paid => return Ok(current),
            CheckoutState::Pending => {}
        }

        let paid = self
            .checkouts_repository
            .record_payment(
                &mut tx,
                checkout,
                Timestamp::now(),
                confirmation.payment_details.as_ref(),
            )
            .await?;

        tx.commit().await?;

        tracing::info!(checkout_uuid = %paid.uuid, "confirmed checkout payment");

        Ok(paid)
    }

    async fn finalize(
        &self,
        user: UserUuid,
        checkout: CheckoutUuid,
    ) -> Result<OrderRecord, CheckoutsServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self
            .checkouts_repository
            .lock_checkout(&mut tx, user, checkout)
            .await?;

        match current.state() {
            CheckoutState::Finalized => return Err(CheckoutsServiceError::AlreadyFinalized),
            CheckoutState::Pending => return Err(CheckoutsServiceError::NotPaid),
            CheckoutState::Paid => {}
        }

        let order = self
            .orders_repository
            .create_order(&mut tx, &NewOrder::from_checkout(&current))
            .await
            .map_err(|error| {
                if is_unique_violation(&error) {
                    CheckoutsServiceError::AlreadyFinalized
                } else {
                    error.into()
                }
            })?;

        self.checkouts_repository
            .mark_finalized(&mut tx, checkout, Timestamp::now())
            .await?;

        self.carts_repository
            .delete_user_cart(&mut tx, current.user_uuid)
            .await?;

        tx.commit().await?;

        tracing::info!(
            checkout_uuid = %checkout,
            order_uuid = %order.uuid,
            "finalized checkout"
        );

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutsService: Send + Sync {
    /// Open a checkout session from a snapshot of line items.
    async fn create_checkout(
        &self,
        user: UserUuid,
        checkout: NewCheckout,
    ) -> Result<CheckoutRecord, CheckoutsServiceError>;

    /// Retrieve one of the user's checkout sessions.
    async fn get_checkout(
        &self,
        user: UserUuid,
        checkout: CheckoutUuid,
    ) -> Result<CheckoutRecord, CheckoutsServiceError>;

    /// Record a gateway payment outcome. Re-confirming a paid session is a no-op.
    async fn confirm_payment(
        &self,
        user: UserUuid,
        checkout: CheckoutUuid,
        confirmation: PaymentConfirmation,
    ) -> Result<CheckoutRecord, CheckoutsServiceError>;

    /// Turn a paid session into an order and clear the user's cart, atomically.
    async fn finalize(
        &self,
        user: UserUuid,
        checkout: CheckoutUuid,
    ) -> Result<OrderRecord, CheckoutsServiceError>;
}
