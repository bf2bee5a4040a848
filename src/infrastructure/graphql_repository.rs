// GraphQL telemetry repository implementation
use crate::application::telemetry_repository::{FetchError, QueryOutcome, TelemetryRepository};
use crate::domain::telemetry::{BucketCode, EnvRecord, TimeRange};
use async_trait::async_trait;

/// JSON path holding the row array inside the upstream response envelope.
const ROWS_POINTER: &str = "/data/aquaenv";

#[derive(Debug, Clone)]
pub struct GraphqlRepository {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlRepository {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

/// Build the environment query. The window and bucket code are embedded as
/// integer literals only; no user-supplied string content ever reaches the
/// query text.
fn build_env_query(range: TimeRange, bucket: BucketCode) -> String {
    format!(
        "query {{ aquaenv(startAt:{}, endAt:{}, timeGroup:{}) {{ id date time unixtime unitTime airTemp waterTemp timeGroup fanSw }} }}",
        range.start_at,
        range.end_at,
        bucket.code()
    )
}

/// Walk the response envelope. An absent, null, or malformed row path is a
/// shape mismatch, never an error.
fn decode_envelope(envelope: serde_json::Value) -> QueryOutcome {
    let Some(rows_value) = envelope.pointer(ROWS_POINTER) else {
        return QueryOutcome::ShapeMismatch;
    };
    match serde_json::from_value::<Vec<EnvRecord>>(rows_value.clone()) {
        Ok(rows) => QueryOutcome::Rows(rows),
        Err(e) => {
            tracing::debug!("row array at {} did not decode: {}", ROWS_POINTER, e);
            QueryOutcome::ShapeMismatch
        }
    }
}

#[async_trait]
impl TelemetryRepository for GraphqlRepository {
    async fn fetch_env(
        &self,
        range: TimeRange,
        bucket: BucketCode,
    ) -> Result<QueryOutcome, FetchError> {
        let request = serde_json::json!({ "query": build_env_query(range, bucket) });
        let envelope = self.passthrough(request).await?;
        Ok(decode_envelope(envelope))
    }

    async fn passthrough(
        &self,
        request: serde_json::Value,
    ) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("X-REQUEST-TYPE", "GraphQL")
            .json(&request)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Upstream {
                status: response.status().as_u16(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}
