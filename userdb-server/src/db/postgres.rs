//! Postgres-backed user store
//!
//! Each operation follows the same shape: acquire a pooled connection,
//! run one statement, let the guard drop. The guard returns the
//! connection to the pool on every exit path, including `?` early returns.

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{DbError, UserStore};
use crate::models::User;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
"#;

/// User store over a Postgres pool
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn ensure_schema(&self) -> Result<(), DbError> {
        tracing::info!("Ensuring users table exists");

        let mut conn = self.pool.acquire().await?;
        sqlx::query(CREATE_USERS_TABLE).execute(&mut *conn).await?;

        Ok(())
    }

    async fn insert(&self, name: &str) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("INSERT INTO users (name) VALUES ($1)")
            .bind(name)
            .execute(&mut *conn)
            .await?;

        tracing::debug!(name, "User inserted");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>, DbError> {
        let mut conn = self.pool.acquire().await?;
        let users = sqlx::query_as::<_, User>("SELECT id, name FROM users ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;

        tracing::debug!(count = users.len(), "Users listed");
        Ok(users)
    }

    async fn ping(&self) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::config::DbConfig;
    use crate::db::create_pool;

    // Integration tests - run with DB_* set
    // cargo test -p userdb-server -- --ignored

    async fn store() -> PgUserStore {
        let config = DbConfig::from_env().expect("DB_* variables required");
        let pool = create_pool(config.connect_options())
            .await
            .expect("pool creation failed");
        let store = PgUserStore::new(pool);
        store.ensure_schema().await.expect("schema creation failed");
        store
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_schema_is_idempotent() {
        let store = store().await;
        store.ensure_schema().await.expect("second call failed");
        store.ensure_schema().await.expect("third call failed");

        let (tables,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = 'users'",
        )
        .fetch_one(store.pool())
        .await
        .expect("query failed");
        assert_eq!(tables, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_adds_exactly_one_row() {
        let store = store().await;
        let before = store.list_all().await.expect("list failed");

        let name = format!("pg-test-{}", before.len());
        store.insert(&name).await.expect("insert failed");

        let after = store.list_all().await.expect("list failed");
        assert_eq!(after.len(), before.len() + 1);

        let added: Vec<_> = after.iter().filter(|u| !before.contains(u)).collect();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].name, name);
        assert!(before.iter().all(|u| u.id != added[0].id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn listed_ids_are_unique_and_ascending() {
        let store = store().await;
        store.insert("bob").await.expect("insert failed");
        store.insert("carol").await.expect("insert failed");

        let users = store.list_all().await.expect("list failed");
        assert!(users.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connections_are_released() {
        let store = store().await;
        for i in 0..20 {
            store.insert(&format!("churn-{}", i)).await.expect("insert failed");
            store.list_all().await.expect("list failed");
        }
        // Dropped guards are handed back to the pool asynchronously, so wait
        // for the idle count to catch up instead of comparing right away.
        let pool = store.pool();
        let drained = tokio::time::timeout(Duration::from_secs(5), async {
            while pool.num_idle() != pool.size() as usize {
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
        })
        .await;

        assert!(
            drained.is_ok(),
            "connections still checked out: size={} idle={}",
            pool.size(),
            pool.num_idle()
        );
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ping_reaches_store() {
        let store = store().await;
        store.ping().await.expect("ping failed");
    }
}
