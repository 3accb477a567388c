//! Transport-independent playlist request handler.
//!
//! [`handle_request`] takes the path and path parameters of an incoming
//! request and produces a complete [`ApiResponse`] (status, headers, JSON
//! body). The HTTP routes in [`super::academies`] are a thin adapter over it.

use crate::state::AppState;
use academy_core::constants::MISSING_ACADEMY_ID_MESSAGE;
use academy_core::{
    academy_prefix, build_media_list, AcademyRecord, AppError, MediaListResponse,
    PlaylistConfig, PlaylistResponse,
};
use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

const ACADEMY_ID_PARAM: &str = "academy_id";
const PLAYLIST_SEGMENT: &str = "/playlist";

/// Incoming request: the raw path plus the matched path parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiRequest {
    #[serde(default)]
    pub path: String,
    #[serde(default, rename = "pathParameters")]
    pub path_parameters: Option<HashMap<String, String>>,
}

impl ApiRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            path_parameters: None,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// The academy id, if present and non-empty.
    pub fn academy_id(&self) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(ACADEMY_ID_PARAM))
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    pub fn wants_playlist(&self) -> bool {
        self.path.contains(PLAYLIST_SEGMENT)
    }
}

/// Structured HTTP-style response: `{statusCode, headers, body}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

fn base_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
    ])
}

/// Headers attached to successful responses and CORS preflights.
pub fn success_headers() -> BTreeMap<String, String> {
    let mut headers = base_headers();
    headers.insert(
        "Access-Control-Allow-Headers".to_string(),
        "Content-Type".to_string(),
    );
    headers.insert(
        "Access-Control-Allow-Methods".to_string(),
        "GET,OPTIONS".to_string(),
    );
    headers
}

impl ApiResponse {
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            headers: success_headers(),
            body,
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self {
            status_code: 400,
            headers: base_headers(),
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        let mut builder = Response::builder().status(status);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder.body(Body::from(self.body)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
    }
}

async fn fetch_academy_record(
    state: &AppState,
    academy_id: &str,
) -> Result<AcademyRecord, AppError> {
    let Some(ref store) = state.config_store else {
        return Ok(AcademyRecord::default());
    };

    let record = store.get_academy(academy_id).await?;
    if record.is_none() {
        tracing::debug!(
            academy_id = %academy_id,
            backend = store.backend_name(),
            "No config record, using defaults"
        );
    }
    Ok(record.unwrap_or_default())
}

/// Handle one playlist/media-list request.
///
/// A missing or empty `academy_id` yields a 400 response. Store failures are
/// returned as errors for the transport to turn into a server fault.
pub async fn handle_request(state: &AppState, request: &ApiRequest) -> Result<ApiResponse, AppError> {
    let Some(academy_id) = request.academy_id() else {
        tracing::debug!(path = %request.path, "Request without academy_id");
        return Ok(ApiResponse::bad_request(MISSING_ACADEMY_ID_MESSAGE));
    };

    let record = fetch_academy_record(state, academy_id).await?;
    let objects = state
        .media_store
        .list_objects(&academy_prefix(academy_id))
        .await?;
    let media_list = build_media_list(objects, &state.urls);
    let total_items = media_list.len();

    let body = if request.wants_playlist() {
        let playlist_config =
            PlaylistConfig::resolve(&record, state.config.default_interval_seconds);
        serde_json::to_string(&PlaylistResponse::new(
            academy_id,
            playlist_config,
            media_list,
            chrono::Utc::now(),
        ))?
    } else {
        serde_json::to_string(&MediaListResponse::new(academy_id, media_list))?
    };

    tracing::info!(
        academy_id = %academy_id,
        playlist = request.wants_playlist(),
        total_items,
        "Media list served"
    );

    Ok(ApiResponse::ok(body))
}
