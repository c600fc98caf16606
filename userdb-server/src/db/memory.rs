//! In-memory user store
//!
//! Ids are assigned sequentially from 1, like a fresh `SERIAL` column.
//! Used by the HTTP tests and by `userdb serve --in-memory`; nothing is
//! persisted.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{DbError, UserStore};
use crate::models::User;

#[derive(Default)]
struct MemoryInner {
    last_id: i32,
    rows: Vec<User>,
}

/// User store held in process memory
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn ensure_schema(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn insert(&self, name: &str) -> Result<(), DbError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.push(User {
            id,
            name: name.to_owned(),
        });
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>, DbError> {
        // Rows are pushed in id order, so no sort is needed.
        Ok(self.inner.read().await.rows.clone())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryUserStore::new();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let store = MemoryUserStore::new();
        store.insert("alice").await.unwrap();
        store.insert("bob").await.unwrap();

        let users = store.list_all().await.unwrap();
        assert_eq!(
            users,
            vec![
                User { id: 1, name: "alice".into() },
                User { id: 2, name: "bob".into() },
            ]
        );
    }

    #[tokio::test]
    async fn ensure_schema_twice_keeps_rows() {
        let store = MemoryUserStore::new();
        store.insert("alice").await.unwrap();
        store.ensure_schema().await.unwrap();
        store.ensure_schema().await.unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_ids() {
        let store = std::sync::Arc::new(MemoryUserStore::new());

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(&format!("user-{}", i)).await })
            })
            .collect();

        for handle in handles {
            handle.await.expect("task panicked").unwrap();
        }

        let mut ids: Vec<_> = store.list_all().await.unwrap().iter().map(|u| u.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }
}
