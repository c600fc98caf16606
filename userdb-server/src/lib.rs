//! userdb-server: HTTP server over a single `users` table
//!
//! Two endpoints: `POST /insert` stores a user, `GET /select` lists them.
//! The [`db`] layer owns the table; the [`http`] layer only talks to it
//! through [`db::UserStore`].

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use config::{ConfigError, DbConfig};
pub use db::{DbError, MemoryUserStore, PgUserStore, UserStore};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
