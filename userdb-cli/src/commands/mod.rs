//! Command implementations for the userdb CLI

pub mod init_db;
pub mod serve;

pub use init_db::{run_init_db, InitDbArgs};
pub use serve::{run_serve, ServeArgs};

use anyhow::{Context, Result};
use userdb_server::db::create_pool;
use userdb_server::{DbConfig, PgUserStore, UserStore};

/// Read `DB_*`, connect, and make sure the users table exists.
///
/// Every failure here is fatal: the caller must not start serving.
pub(crate) async fn connect_store() -> Result<PgUserStore> {
    let config = DbConfig::from_env().context("Invalid database configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "Connecting to database"
    );

    let pool = create_pool(config.connect_options())
        .await
        .context("Failed to create database pool")?;

    let store = PgUserStore::new(pool);
    store
        .ensure_schema()
        .await
        .context("Failed to create users table")?;

    Ok(store)
}
