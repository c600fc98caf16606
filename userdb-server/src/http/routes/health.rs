//! Liveness of the service and reachability of the user store
//!
//! Served on `/` as well as `/health`: a load balancer left at its default
//! health-check path probes `/`.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Store reachability as reported by [`UserStore::ping`](crate::db::UserStore::ping)
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Up,
    Down,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: StoreStatus,
    pub version: &'static str,
}

/// GET /health - 200 when the store answers, 503 otherwise
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, store) = match state.store().ping().await {
        Ok(()) => (StatusCode::OK, "ok", StoreStatus::Up),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: store unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", StoreStatus::Down)
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            store,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::db::MemoryUserStore;

    #[tokio::test]
    async fn reachable_store_is_up() {
        let state = AppState::new(Arc::new(MemoryUserStore::new()));
        let (code, Json(body)) = health(State(state)).await;

        assert_eq!(code, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.store, StoreStatus::Up);
    }

    #[test]
    fn store_status_serializes_lowercase() {
        let json = serde_json::to_value(StoreStatus::Down).unwrap();
        assert_eq!(json, serde_json::json!("down"));
    }
}
