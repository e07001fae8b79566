use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use validator::ValidationErrors;

use app::error::{AccessError, CustomError, MatchError, UserError, WindowError};

use crate::models::response::{ApiErrorResponse, ValidationErrorResponse};

/// Handler error. Domain errors raised anywhere below the router are carried
/// through `anyhow` and mapped to a status code here.
#[derive(Debug)]
pub struct ApiError(pub anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        let err = &self.0;

        if let Some(e) = err.downcast_ref::<CustomError>() {
            return e.code;
        }
        if let Some(e) = err.downcast_ref::<UserError>() {
            return match e {
                UserError::NotFound => StatusCode::NOT_FOUND,
                UserError::AlreadyExists => StatusCode::CONFLICT,
                UserError::Disabled => StatusCode::FORBIDDEN,
            };
        }
        if let Some(e) = err.downcast_ref::<MatchError>() {
            return match e {
                MatchError::NotFound => StatusCode::NOT_FOUND,
                MatchError::InvalidParticipants(_) => StatusCode::BAD_REQUEST,
                MatchError::NotOwner => StatusCode::FORBIDDEN,
            };
        }
        if let Some(e) = err.downcast_ref::<AccessError>() {
            return match e {
                AccessError::Unauthenticated => StatusCode::UNAUTHORIZED,
                AccessError::Forbidden | AccessError::Disabled => StatusCode::FORBIDDEN,
            };
        }
        if err.is::<WindowError>() {
            return StatusCode::BAD_REQUEST;
        }
        if err.is::<ValidationErrors>() {
            return StatusCode::UNPROCESSABLE_ENTITY;
        }
        if let Some(e) = err.downcast_ref::<JsonRejection>() {
            return e.status();
        }
        if let Some(e) = err.downcast_ref::<QueryRejection>() {
            return e.status();
        }
        if let Some(e) = err.downcast_ref::<PathRejection>() {
            return e.status();
        }

        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let Some(errors) = self.0.downcast_ref::<ValidationErrors>() {
            return (status, Json(ValidationErrorResponse::new(errors.clone()))).into_response();
        }

        let message = if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
            "Internal server error".to_string()
        } else {
            tracing::debug!("Request rejected with {status}: {}", self.0);
            self.0.to_string()
        };

        (status, Json(ApiErrorResponse::new(message))).into_response()
    }
}
