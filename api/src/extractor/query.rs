use axum::extract::{FromRequestParts, Path as AxumPath, Query as AxumQuery};

use crate::error::ApiError;

/// Query string extractor that rejects through [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(AxumQuery), rejection(ApiError))]
pub struct Query<T>(pub T);

/// Path parameter extractor that rejects through [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(AxumPath), rejection(ApiError))]
pub struct Path<T>(pub T);
