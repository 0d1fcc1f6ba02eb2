//! App Context

use std::sync::Arc;

use crate::{
    auth::{AuthService, JwtConfig, PgAuthService},
    database::Db,
    domain::{
        carts::{CartsService, PgCartsService},
        checkouts::{CheckoutsService, PgCheckoutsService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        subscribers::{PgSubscribersService, SubscribersService},
        users::{PgUsersService, UsersService},
    },
    storage::{HttpObjectStore, ObjectStore, StorageConfig},
};

/// Settings for the services that need more than a database handle.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt: JwtConfig,
    pub storage: StorageConfig,
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UsersService>,
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub checkouts: Arc<dyn CheckoutsService>,
    pub orders: Arc<dyn OrdersService>,
    pub subscribers: Arc<dyn SubscribersService>,
    pub storage: Arc<dyn ObjectStore>,
}

impl AppContext {
    /// Wire every service to `db`.
    #[must_use]
    pub fn new(db: Db, config: AppConfig) -> Self {
        Self {
            auth: Arc::new(PgAuthService::new(db.clone(), &config.jwt)),
            users: Arc::new(PgUsersService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            checkouts: Arc::new(PgCheckoutsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            subscribers: Arc::new(PgSubscribersService::new(db)),
            storage: Arc::new(HttpObjectStore::new(config.storage)),
        }
    }
}
