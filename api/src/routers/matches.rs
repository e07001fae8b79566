use axum::{
    Extension, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use app::access::{AccessPolicy, RolePolicy};
use app::error::MatchError;
use app::persistence::matches::{
    create_match, delete_match, get_match, schedule_match, search_matches,
};
use app::state::AppState;
use models::params::matches::{CreateMatchParams, ScheduleMatchParams};
use models::queries::MatchQuery;
use models::schemas::matches::MatchSchema;
use models::schemas::pagination::PaginatedData;
use models::schemas::user::AuthSchema;

use crate::error::ApiError;
use crate::extractor::{Json, Path, Query, Valid};
use crate::models::response::ApiErrorResponse;

/// Matches in a month (current month by default), newest first.
#[utoipa::path(
    get,
    path = "/matches",
    tag = "matches",
    params(MatchQuery),
    responses(
        (status = 200, description = "One page of matches", body = PaginatedData<MatchSchema>),
        (status = 400, description = "Malformed month", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn matches_get(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Query(query): Query<MatchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    RolePolicy.require_active(&auth)?;

    let page = search_matches(&state.conn, query, Utc::now().date_naive()).await?;
    Ok(Json(page))
}

/// Records a completed match with the caller on side A.
#[utoipa::path(
    post,
    path = "/matches",
    tag = "matches",
    request_body = CreateMatchParams,
    responses(
        (status = 201, description = "Match recorded", body = MatchSchema),
        (status = 400, description = "Unknown or repeated players", body = ApiErrorResponse),
        (status = 422, description = "Malformed scorecard")
    ),
    security(("bearer_auth" = []))
)]
pub async fn matches_post(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Valid(Json(params)): Valid<Json<CreateMatchParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let caller = RolePolicy.require_active(&auth)?;

    let record = create_match(&state.conn, caller, params).await?;
    Ok((StatusCode::CREATED, Json(MatchSchema::from(record))))
}

#[utoipa::path(
    post,
    path = "/matches/schedule",
    tag = "matches",
    request_body = ScheduleMatchParams,
    responses(
        (status = 201, description = "Match scheduled", body = MatchSchema),
        (status = 400, description = "Unknown or repeated players", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn schedule_post(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Valid(Json(params)): Valid<Json<ScheduleMatchParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let caller = RolePolicy.require_active(&auth)?;

    let record = schedule_match(&state.conn, caller, params).await?;
    Ok((StatusCode::CREATED, Json(MatchSchema::from(record))))
}

#[utoipa::path(
    get,
    path = "/matches/{id}",
    tag = "matches",
    params(("id" = String, Path, description = "Match id")),
    responses(
        (status = 200, description = "Match", body = MatchSchema),
        (status = 404, description = "No such match", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn matches_id_get(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    RolePolicy.require_active(&auth)?;

    let record = get_match(&state.conn, &id)
        .await?
        .ok_or(MatchError::NotFound)?;
    Ok(Json(MatchSchema::from(record)))
}

/// Deletes a match the caller created or leads. Administrators may delete any.
#[utoipa::path(
    delete,
    path = "/matches/{id}",
    tag = "matches",
    params(("id" = String, Path, description = "Match id")),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 403, description = "Not the caller's match", body = ApiErrorResponse),
        (status = 404, description = "No such match", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn matches_id_delete(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let caller = RolePolicy.require_active(&auth)?;

    let record = get_match(&state.conn, &id)
        .await?
        .ok_or(MatchError::NotFound)?;
    if !RolePolicy.can_delete_match(caller, &record) {
        return Err(MatchError::NotOwner.into());
    }

    delete_match(&state.conn, &record.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn create_match_router() -> Router<AppState> {
    Router::new()
        .route("/", get(matches_get).post(matches_post))
        .route("/schedule", post(schedule_post))
        .route("/{id}", get(matches_id_get).delete(matches_id_delete))
}
