use serde::Serialize;
use utoipa::ToSchema;

/// Body of every non-validation failure.
#[derive(Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub message: String,
}

impl ApiErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 422 body: a fixed message plus the per-field validator report.
#[derive(Serialize)]
pub struct ValidationErrorResponse<T> {
    pub message: &'static str,
    pub details: T,
}

impl<T: Serialize> ValidationErrorResponse<T> {
    pub const fn new(details: T) -> Self {
        Self {
            message: "Validation error",
            details,
        }
    }
}
