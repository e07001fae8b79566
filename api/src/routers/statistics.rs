use axum::{
    Extension, Router,
    extract::State,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use app::access::{AccessPolicy, RolePolicy};
use app::persistence::statistics::player_statistics;
use app::state::AppState;
use models::queries::StatisticsQuery;
use models::schemas::leaderboard::PlayerStatistics;
use models::schemas::user::AuthSchema;

use crate::error::ApiError;
use crate::extractor::{Json, Path, Query};
use crate::models::response::ApiErrorResponse;

#[utoipa::path(
    get,
    path = "/statistics/me",
    tag = "statistics",
    params(StatisticsQuery),
    responses(
        (status = 200, description = "The caller's statistics", body = PlayerStatistics),
        (status = 400, description = "Malformed month", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn statistics_me_get(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Query(query): Query<StatisticsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let caller = RolePolicy.require_active(&auth)?;

    let stats = player_statistics(
        &state.conn,
        &state.config,
        &caller.id,
        query.month.as_deref(),
        Utc::now().date_naive(),
    )
    .await?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/statistics/{user_id}",
    tag = "statistics",
    params(
        ("user_id" = String, Path, description = "Member id"),
        StatisticsQuery
    ),
    responses(
        (status = 200, description = "Member statistics", body = PlayerStatistics),
        (status = 404, description = "No such member", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn statistics_user_get(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Path(user_id): Path<String>,
    Query(query): Query<StatisticsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    RolePolicy.require_active(&auth)?;

    let stats = player_statistics(
        &state.conn,
        &state.config,
        &user_id,
        query.month.as_deref(),
        Utc::now().date_naive(),
    )
    .await?;
    Ok(Json(stats))
}

pub fn create_statistics_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(statistics_me_get))
        .route("/{user_id}", get(statistics_user_get))
}
