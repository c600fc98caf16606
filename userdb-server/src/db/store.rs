//! The storage seam between the HTTP layer and the `users` table

use async_trait::async_trait;

use crate::models::User;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Storage operations for user records.
///
/// Implementations own their connections; callers never see a session.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create the `users` table if it does not exist. Safe to call on
    /// every startup.
    async fn ensure_schema(&self) -> Result<(), DbError>;

    /// Insert one record. The store assigns the id.
    ///
    /// `name` is not re-validated here; presence is checked at the HTTP
    /// boundary.
    async fn insert(&self, name: &str) -> Result<(), DbError>;

    /// All records, ascending by id. Empty table yields an empty vec.
    async fn list_all(&self) -> Result<Vec<User>, DbError>;

    /// Round-trip to the store without touching the `users` table.
    async fn ping(&self) -> Result<(), DbError>;
}
