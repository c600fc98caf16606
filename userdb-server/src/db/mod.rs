//! Database layer - connection pool and user store
//!
//! # Design Principles
//!
//! - Connection pool built once at startup, passed in explicitly - no globals
//! - Every operation acquires its own pooled connection and releases it on drop
//! - One statement per operation - no transaction spans two calls
//! - Schema creation is idempotent (`CREATE TABLE IF NOT EXISTS`)

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryUserStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgUserStore;
pub use store::{DbError, UserStore};
