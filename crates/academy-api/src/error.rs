//! HTTP error response conversion
//!
//! Faults from the playlist handler are rendered as an opaque JSON 500; the
//! underlying error is only logged.

use academy_core::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rules: both the trait and AppError are foreign to this crate).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");

        let body = ErrorResponse {
            error: "Internal server error".to_string(),
            code: "INTERNAL_ERROR".to_string(),
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(body),
        )
            .into_response()
    }
}
