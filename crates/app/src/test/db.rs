//! One Postgres container per test binary, one migrated database per test.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};
use uuid::Uuid;

use crate::database::MIGRATOR;

const USER: &str = "storefront_test";
const PASSWORD: &str = "storefront_test_password";

static CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Names of databases whose `TestDb` has been dropped.
static DROPPED: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn container() -> &'static ContainerAsync<PostgresImage> {
    CONTAINER
        .get_or_init(|| async {
            PostgresImage::default()
                .with_user(USER)
                .with_password(PASSWORD)
                .with_db_name(USER)
                .start()
                .await
                .expect("Failed to start PostgreSQL container")
        })
        .await
}

async fn database_url(name: &str) -> String {
    let port = container()
        .await
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{name}")
}

async fn admin_connection() -> Result<PgConnection, sqlx::Error> {
    PgConnection::connect(&database_url("postgres").await).await
}

fn spawn_dropper() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            let Ok(mut conn) = admin_connection().await else {
                continue;
            };

            let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
                .execute(&mut conn)
                .await;
            let _ = conn.close().await;
        }
    });

    sender
}

/// A freshly migrated database, dropped in the background once this value is.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl TestDb {
    pub async fn new() -> Self {
        DROPPED.get_or_init(|| async { spawn_dropper() }).await;

        // Generated names only contain `[a-z0-9_]`, so quoting is enough.
        let name = format!("storefront_test_{}", Uuid::now_v7().simple());

        let mut conn = admin_connection()
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close().await.expect("Failed to close admin connection");

        let pool = PgPool::connect(&database_url(&name).await)
            .await
            .expect("Failed to connect to test database");

        MIGRATOR
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROPPED.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrations_create_storefront_tables() {
        let test_db = TestDb::new().await;

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT table_name::text FROM information_schema.tables \
             WHERE table_schema = 'public' AND table_name <> '_sqlx_migrations' \
             ORDER BY table_name",
        )
        .fetch_all(test_db.pool())
        .await
        .expect("Failed to list tables");

        assert_eq!(
            tables,
            vec!["carts", "checkouts", "orders", "products", "subscribers", "users"]
        );
    }

    #[tokio::test]
    async fn each_test_db_is_isolated() {
        let first = TestDb::new().await;
        let second = TestDb::new().await;

        sqlx::query("CREATE TABLE scratch (id INTEGER)")
            .execute(first.pool())
            .await
            .expect("Failed to create table");

        let seen: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = 'scratch')",
        )
        .fetch_one(second.pool())
        .await
        .expect("Failed to query catalog");

        assert!(!seen);
    }
}
