use axum::{Extension, extract::Request, middleware::Next, response::Response};

use app::access::{AccessPolicy, RolePolicy};
use models::schemas::user::AuthSchema;

use crate::error::ApiError;

/// Lets only enabled administrators through.
pub async fn require_admin(
    Extension(auth): Extension<AuthSchema>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let admin = RolePolicy.require_admin(&auth)?;
    tracing::debug!(admin = %admin.id, path = %req.uri().path(), "admin request");
    Ok(next.run(req).await)
}
