use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use app::persistence::users::get_user;
use app::state::AppState;
use app::utils::decode_identity;
use models::schemas::user::{AuthSchema, CurrentUser};

use crate::error::ApiError;

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolves the bearer token to the caller's profile and stores it as an
/// `AuthSchema` extension. A missing or invalid token yields an anonymous caller.
pub async fn identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = bearer_token(req.headers()).and_then(|token| {
        decode_identity(&state.config, token)
            .inspect_err(|e| tracing::debug!("Ignoring bearer token: {}", e))
            .ok()
    });

    let auth = match claims {
        Some(claims) => {
            let user = get_user(&state.conn, &claims.sub)
                .await?
                .map(CurrentUser::from);
            AuthSchema {
                subject: Some(claims.sub),
                user,
            }
        }
        None => AuthSchema::default(),
    };

    req.extensions_mut().insert(auth);

    Ok(next.run(req).await)
}
