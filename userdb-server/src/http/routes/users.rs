//! User endpoints: `POST /insert` and `GET /select`

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::models::{User, UserName};
use crate::state::AppState;

/// Insert request. `name` is kept as raw JSON so that absent and falsy
/// values (`null`, `""`, `0`, `false`, `[]`, `{}`) all read as missing.
#[derive(Debug, Deserialize)]
pub struct InsertUserRequest {
    #[serde(default)]
    pub name: Option<Value>,
}

/// Confirmation body for a successful insert
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /insert - store one user
async fn insert_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<InsertUserRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let name = UserName::from_json(req.name.as_ref())?;
    state.store().insert(name.as_str()).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User added successfully",
        }),
    ))
}

/// GET /select - list every user
async fn select_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store().list_all().await?;
    Ok(Json(users))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/insert", post(insert_user))
        .route("/select", get(select_users))
}
