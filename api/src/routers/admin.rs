use axum::{
    Extension, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
};
use chrono::Utc;

use app::error::CustomError;
use app::persistence::matches::{delete_match, search_matches, update_match};
use app::persistence::statistics::leaderboard;
use app::persistence::users::{
    delete_user, list_users, refresh_lifetime_counters, set_enabled, set_role,
};
use app::state::AppState;
use models::domains::sea_orm_active_enums::UserRole;
use models::params::matches::UpdateMatchParams;
use models::params::user::{UpdateEnabledParams, UpdateRoleParams};
use models::queries::user::UserQuery;
use models::queries::{LeaderboardQuery, MatchQuery};
use models::schemas::leaderboard::LeaderboardSchema;
use models::schemas::matches::MatchSchema;
use models::schemas::pagination::PaginatedData;
use models::schemas::user::{
    AuthSchema, CountersRefreshSchema, DeletedUserSchema, UserListSchema, UserSchema,
};

use crate::error::ApiError;
use crate::extractor::{Json, Path, Query, Valid};
use crate::middleware::admin::require_admin;
use crate::models::response::ApiErrorResponse;

/// Administrators cannot demote, disable or delete themselves.
fn refuse_self(auth: &AuthSchema, target: &str, action: &str) -> Result<(), ApiError> {
    if auth.user.as_ref().is_some_and(|admin| admin.id == target) {
        return Err(CustomError::new(
            StatusCode::BAD_REQUEST,
            format!("Administrators cannot {action} their own account"),
        )
        .into());
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "admin",
    params(UserQuery),
    responses(
        (status = 200, description = "Every profile with lifetime counters", body = UserListSchema),
        (status = 403, description = "Administrator role required", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn admin_users_get(
    state: State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let users = list_users(&state.conn, query).await?;
    Ok(Json(UserListSchema::from(users)))
}

#[utoipa::path(
    patch,
    path = "/admin/users/{id}/role",
    tag = "admin",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateRoleParams,
    responses(
        (status = 200, description = "Role changed", body = UserSchema),
        (status = 404, description = "No such user", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn admin_user_role_patch(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Path(id): Path<String>,
    Json(params): Json<UpdateRoleParams>,
) -> Result<impl IntoResponse, ApiError> {
    if params.role != UserRole::Admin {
        refuse_self(&auth, &id, "demote")?;
    }

    let user = set_role(&state.conn, &id, params.role).await?;
    Ok(Json(UserSchema::from(user)))
}

#[utoipa::path(
    patch,
    path = "/admin/users/{id}/enabled",
    tag = "admin",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateEnabledParams,
    responses(
        (status = 200, description = "Account state changed", body = UserSchema),
        (status = 404, description = "No such user", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn admin_user_enabled_patch(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Path(id): Path<String>,
    Json(params): Json<UpdateEnabledParams>,
) -> Result<impl IntoResponse, ApiError> {
    if !params.enabled {
        refuse_self(&auth, &id, "disable")?;
    }

    let user = set_enabled(&state.conn, &id, params.enabled).await?;
    Ok(Json(UserSchema::from(user)))
}

/// Deletes the member and every match they played in.
#[utoipa::path(
    delete,
    path = "/admin/users/{id}",
    tag = "admin",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User and their matches removed", body = DeletedUserSchema),
        (status = 404, description = "No such user", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn admin_user_delete(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    refuse_self(&auth, &id, "delete")?;

    let removed_matches = delete_user(&state.conn, &id).await?;
    Ok(Json(DeletedUserSchema {
        id,
        removed_matches,
    }))
}

/// Rebuilds every member's lifetime counters from the match history.
#[utoipa::path(
    post,
    path = "/admin/users/recompute",
    tag = "admin",
    responses(
        (status = 200, description = "Counters rewritten", body = CountersRefreshSchema)
    ),
    security(("bearer_auth" = []))
)]
pub async fn admin_users_recompute_post(
    state: State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let updated_users = refresh_lifetime_counters(&state.conn, &state.config).await?;
    Ok(Json(CountersRefreshSchema { updated_users }))
}

#[utoipa::path(
    get,
    path = "/admin/matches",
    tag = "admin",
    params(MatchQuery),
    responses(
        (status = 200, description = "One page of matches", body = PaginatedData<MatchSchema>)
    ),
    security(("bearer_auth" = []))
)]
pub async fn admin_matches_get(
    state: State<AppState>,
    Query(query): Query<MatchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = search_matches(&state.conn, query, Utc::now().date_naive()).await?;
    Ok(Json(page))
}

#[utoipa::path(
    patch,
    path = "/admin/matches/{id}",
    tag = "admin",
    params(("id" = String, Path, description = "Match id")),
    request_body = UpdateMatchParams,
    responses(
        (status = 200, description = "Match rewritten", body = MatchSchema),
        (status = 404, description = "No such match", body = ApiErrorResponse),
        (status = 422, description = "Malformed scorecard")
    ),
    security(("bearer_auth" = []))
)]
pub async fn admin_match_patch(
    state: State<AppState>,
    Path(id): Path<String>,
    Valid(Json(params)): Valid<Json<UpdateMatchParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let record = update_match(&state.conn, &id, params).await?;
    Ok(Json(MatchSchema::from(record)))
}

#[utoipa::path(
    delete,
    path = "/admin/matches/{id}",
    tag = "admin",
    params(("id" = String, Path, description = "Match id")),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 404, description = "No such match", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn admin_match_delete(
    state: State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    delete_match(&state.conn, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Leaderboard with any ranking and, on request, the full roster.
#[utoipa::path(
    get,
    path = "/admin/leaderboard",
    tag = "admin",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Leaderboard", body = LeaderboardSchema)
    ),
    security(("bearer_auth" = []))
)]
pub async fn admin_leaderboard_get(
    state: State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let board = leaderboard(&state.conn, &state.config, query, Utc::now().date_naive()).await?;
    Ok(Json(board))
}

pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin_users_get))
        .route("/users/recompute", post(admin_users_recompute_post))
        .route("/users/{id}", axum::routing::delete(admin_user_delete))
        .route("/users/{id}/role", patch(admin_user_role_patch))
        .route("/users/{id}/enabled", patch(admin_user_enabled_patch))
        .route("/matches", get(admin_matches_get))
        .route("/matches/{id}", patch(admin_match_patch).delete(admin_match_delete))
        .route("/leaderboard", get(admin_leaderboard_get))
        .route_layer(middleware::from_fn(require_admin))
}
