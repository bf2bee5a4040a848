// HTTP request handlers
use crate::application::feed::FETCH_FAILED_MESSAGE;
use crate::application::stream_source::RelayError;
use crate::application::telemetry_repository::FetchError;
use crate::domain::telemetry::{BucketCode, EnvRecord, TimeRange};
use crate::domain::timebucket::{format_label, parse_local_datetime, to_epoch_seconds};
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    body::Body,
    extract::{Query, State},
    http::{HeaderValue, Response, StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Content type assumed when the camera upstream omits one.
pub const DEFAULT_STREAM_CONTENT_TYPE: &str = "multipart/x-mixed-replace; boundary=frame";

#[derive(Deserialize)]
pub struct EnvWindowQuery {
    pub start: String,
    pub end: String,
    #[serde(rename = "timeGroup", default = "default_time_group")]
    pub time_group: i32,
}

fn default_time_group() -> i32 {
    10
}

/// Row as served to the chart: the upstream shape plus the label
/// preformatted for the active bucket code.
#[derive(Serialize)]
pub struct LabeledRow {
    #[serde(flatten)]
    pub record: EnvRecord,
    pub label: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvWindowResponse {
    pub rows: Vec<LabeledRow>,
    pub fan_on: Vec<LabeledRow>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Serve one chart window: raw rows plus the derived fan-on series, both
/// labeled for the requested bucket code.
pub async fn env_window(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EnvWindowQuery>,
) -> Response<Body> {
    let (Some(start), Some(end)) = (
        parse_local_datetime(&query.start),
        parse_local_datetime(&query.end),
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "start and end must be datetime-local values" })),
        )
            .into_response();
    };

    let range = TimeRange::new(to_epoch_seconds(start), to_epoch_seconds(end));
    let bucket = BucketCode(query.time_group);

    match state.env_service.fetch_window(range, bucket).await {
        Ok(window) => {
            let response = EnvWindowResponse {
                rows: label_rows(window.rows, bucket),
                fan_on: label_rows(window.fan_on, bucket),
            };
            Json(response).into_response()
        }
        Err(e) => fetch_failure_response(e),
    }
}

/// Forward a GraphQL request body verbatim to the upstream telemetry
/// source.
pub async fn graphql_passthrough(
    State(state): State<Arc<AppState>>,
    Json(request): Json<serde_json::Value>,
) -> Response<Body> {
    match state.env_service.passthrough(request).await {
        Ok(document) => Json(document).into_response(),
        Err(FetchError::Upstream { status }) => {
            tracing::warn!(status, "graphql upstream rejected request");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "Upstream error" })),
            )
                .into_response()
        }
        Err(FetchError::Transport(reason)) => {
            tracing::error!(%reason, "graphql passthrough failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Proxy error" })),
            )
                .into_response()
        }
    }
}

/// Relay the live camera stream to the client.
///
/// The upstream body is forwarded chunk-by-chunk for as long as the client
/// stays connected; it is never buffered whole. Upstream rejection and
/// connection failure map to distinct statuses with no partial body.
pub async fn relay_stream(State(state): State<Arc<AppState>>) -> Response<Body> {
    match state.stream_source.open().await {
        Ok(upstream) => {
            let content_type = upstream
                .content_type
                .and_then(|v| HeaderValue::from_str(&v).ok())
                .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_STREAM_CONTENT_TYPE));

            let builder = Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, content_type)
                .header(header::CACHE_CONTROL, "no-cache, private")
                .header(header::PRAGMA, "no-cache")
                .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");

            match builder.body(Body::from_stream(upstream.body)) {
                Ok(response) => response,
                Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            }
        }
        Err(RelayError::Upstream { status }) => {
            tracing::warn!(status, "camera upstream rejected stream request");
            (StatusCode::BAD_GATEWAY, "Upstream error").into_response()
        }
        Err(RelayError::Transport(reason)) => {
            tracing::error!(%reason, "mjpeg relay failed to reach upstream");
            (StatusCode::INTERNAL_SERVER_ERROR, "Proxy error").into_response()
        }
    }
}

fn label_rows(rows: Vec<EnvRecord>, bucket: BucketCode) -> Vec<LabeledRow> {
    rows.into_iter()
        .map(|record| {
            let label = format_label(record.unit_time, bucket);
            LabeledRow { record, label }
        })
        .collect()
}

// Transport and upstream failures carry the same operator-visible message;
// only the status differs.
fn fetch_failure_response(error: FetchError) -> Response<Body> {
    let status = match &error {
        FetchError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        FetchError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::error!(%error, "telemetry fetch failed");
    (status, Json(json!({ "error": FETCH_FAILED_MESSAGE }))).into_response()
}
