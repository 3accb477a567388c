//! HTTP routes for academy media lists and playlists.

use crate::error::HttpAppError;
use crate::handlers::playlist::{handle_request, ApiRequest, ApiResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use std::collections::HashMap;
use std::sync::Arc;

/// `GET /academies/{academy_id}` and `GET /academies/{academy_id}/playlist`
pub async fn get_academy_media(
    State(state): State<Arc<AppState>>,
    Path(params): Path<HashMap<String, String>>,
    uri: Uri,
) -> Result<ApiResponse, HttpAppError> {
    let request = ApiRequest {
        path: uri.path().to_string(),
        path_parameters: Some(params),
    };

    handle_request(&state, &request).await.map_err(|e| {
        tracing::error!(error = %e, path = %request.path, "Failed to build media list");
        e.into()
    })
}

/// `GET /academies` without an id; always answered with the 400 body.
pub async fn get_without_academy(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<ApiResponse, HttpAppError> {
    let request = ApiRequest::new(uri.path());
    handle_request(&state, &request).await.map_err(Into::into)
}

/// CORS preflight for the academy routes.
pub async fn preflight() -> impl IntoResponse {
    let mut response = ApiResponse::ok(String::new()).into_response();
    *response.status_mut() = StatusCode::NO_CONTENT;
    response
}
