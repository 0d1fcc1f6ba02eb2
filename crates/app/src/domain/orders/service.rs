//! Orders service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    auth::AuthenticatedUser,
    database::Db,
    domain::{
        orders::{
            data::OrderStatusUpdate,
            errors::OrdersServiceError,
            records::{OrderRecord, OrderUuid},
            repository::PgOrdersRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_user_orders(
        &self,
        user: UserUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_user_orders(&mut tx, user).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(
        &self,
        viewer: AuthenticatedUser,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        if order.user_uuid != viewer.uuid && !viewer.is_admin() {
            return Err(OrdersServiceError::NotFound);
        }

        Ok(order)
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        update: OrderStatusUpdate,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut record = self.repository.lock_order(&mut tx, order).await?;

        update.apply(&mut record, Timestamp::now());

        let updated = self.repository.save_order(&mut tx, &record).await?;

        tx.commit().await?;

        tracing::info!(order_uuid = %updated.uuid, status = %updated.status, "updated order");

        Ok(updated)
    }

    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_order(&mut tx, order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// A user's orders, most recent first.
    async fn list_user_orders(&self, user: UserUuid)
    -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve an order visible to `viewer`: their own, or any for admins.
    async fn get_order(
        &self,
        viewer: AuthenticatedUser,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Every order, most recent first.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Change an order's fulfilment status.
    async fn update_status(
        &self,
        order: OrderUuid,
        update: OrderStatusUpdate,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Deletes an order with the given UUID.
    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError>;
}
