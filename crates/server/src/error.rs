use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gitscope_utils::response::ApiResponse;
use thiserror::Error;

/// Route-level failures, rendered as the standard error envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("profile not loaded yet")]
    ProfileNotLoaded,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ProfileNotLoaded => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("API error: {}", self);
        let body = Json(ApiResponse::<()>::error(&self.to_string()));
        (self.status_code(), body).into_response()
    }
}
