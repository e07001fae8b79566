use axum::{
    Extension, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use app::access::{AccessPolicy, RolePolicy};
use app::error::{AccessError, UserError};
use app::persistence::users::{create_profile, get_user, list_users, update_profile};
use app::state::AppState;
use models::params::user::{CreateProfileParams, UpdateProfileParams};
use models::queries::user::UserQuery;
use models::schemas::pagination::ListSchema;
use models::schemas::user::{AuthSchema, UserSchema, UserSummarySchema};

use crate::error::ApiError;
use crate::extractor::{Json, Path, Query, Valid};
use crate::models::response::ApiErrorResponse;

/// Member roster (id and name) for picking partners and opponents.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(UserQuery),
    responses(
        (status = 200, description = "Roster", body = ListSchema<UserSummarySchema>),
        (status = 401, description = "Not signed in", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn users_get(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Query(query): Query<UserQuery>,
) -> Result<impl IntoResponse, ApiError> {
    RolePolicy.require_active(&auth)?;

    let users = list_users(&state.conn, query).await?;
    Ok(Json(ListSchema::<UserSummarySchema>::from(users)))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Profile", body = UserSchema),
        (status = 404, description = "No such user", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn users_id_get(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    RolePolicy.require_active(&auth)?;

    let user = get_user(&state.conn, &id).await?;
    user.map(|user| Json(UserSchema::from(user)))
        .ok_or_else(|| UserError::NotFound.into())
}

#[utoipa::path(
    get,
    path = "/users/me",
    tag = "users",
    responses(
        (status = 200, description = "The caller's profile", body = UserSchema),
        (status = 401, description = "No profile for this token", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn me_get(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
) -> Result<impl IntoResponse, ApiError> {
    let caller = RolePolicy.require_user(&auth)?;

    let user = get_user(&state.conn, &caller.id)
        .await?
        .ok_or(UserError::NotFound)?;
    Ok(Json(UserSchema::from(user)))
}

/// Creates the caller's profile after sign-up with the identity provider.
#[utoipa::path(
    post,
    path = "/users/me",
    tag = "users",
    request_body = CreateProfileParams,
    responses(
        (status = 201, description = "Profile created", body = UserSchema),
        (status = 409, description = "Profile or email already exists", body = ApiErrorResponse),
        (status = 422, description = "Invalid profile")
    ),
    security(("bearer_auth" = []))
)]
pub async fn me_post(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Valid(Json(params)): Valid<Json<CreateProfileParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let subject = auth.subject.as_deref().ok_or(AccessError::Unauthenticated)?;

    let user = create_profile(&state.conn, subject, params).await?;
    Ok((StatusCode::CREATED, Json(UserSchema::from(user))))
}

#[utoipa::path(
    patch,
    path = "/users/me",
    tag = "users",
    request_body = UpdateProfileParams,
    responses(
        (status = 200, description = "Profile updated", body = UserSchema),
        (status = 403, description = "Account disabled", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn me_patch(
    state: State<AppState>,
    Extension(auth): Extension<AuthSchema>,
    Valid(Json(params)): Valid<Json<UpdateProfileParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let caller = RolePolicy.require_active(&auth)?;

    let user = update_profile(&state.conn, &caller.id, params).await?;
    Ok(Json(UserSchema::from(user)))
}

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(users_get))
        .route("/me", get(me_get).post(me_post).patch(me_patch))
        .route("/{id}", get(users_id_get))
}
