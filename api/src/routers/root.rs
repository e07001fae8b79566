use axum::{Json, Router, extract::State, routing::get};
use sea_orm::{ConnectionTrait, Statement};
use serde_json::{Value, json};

use app::state::AppState;

use crate::error::ApiError;

/// Liveness check that also makes a database round-trip.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service and database are reachable"),
        (status = 500, description = "Database unreachable", body = crate::models::response::ApiErrorResponse)
    )
)]
pub async fn health_get(state: State<AppState>) -> Result<Json<Value>, ApiError> {
    state
        .conn
        .query_one(Statement::from_string(
            state.conn.get_database_backend(),
            "SELECT 1",
        ))
        .await?;

    Ok(Json(json!({ "status": "ok" })))
}

pub fn create_root_router() -> Router<AppState> {
    Router::new().route("/health", get(health_get))
}
