use axum::{
    Extension, Router,
    extract::State,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use app::access::{AccessPolicy, RolePolicy};
use app::persistence::statistics::leaderboard;
use app::state::AppState;
use models::queries::LeaderboardQuery;
use models::schemas::leaderboard::{LeaderboardSchema, RosterView};
use models::schemas::user::AuthSchema;

use crate::error::ApiError;
use crate::extractor::{Json, Query};
use crate::models::response::ApiErrorResponse;

/// Ranked members with at least one completed match in the month.
#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = "statistics",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Leaderboard", body = LeaderboardSchema),
        (status = 400, description = "Malformed month", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn leaderboard_get(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<impl IntoResponse, ApiError> {
    RolePolicy.require_active(&auth)?;

    // the full roster view is reserved for the admin route
    let query = LeaderboardQuery {
        roster: Some(RosterView::Ranked),
        ..query
    };
    let board = leaderboard(&state.conn, &state.config, query, Utc::now().date_naive()).await?;
    Ok(Json(board))
}

pub fn create_leaderboard_router() -> Router<AppState> {
    Router::new().route("/", get(leaderboard_get))
}
