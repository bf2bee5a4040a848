// Repository trait for telemetry data access
use crate::domain::telemetry::{BucketCode, EnvRecord, TimeRange};
use async_trait::async_trait;
use thiserror::Error;

/// Failure classes on the telemetry path. Both surface to the operator as
/// the same generic message; the split only drives status mapping and
/// logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("upstream returned status {status}")]
    Upstream { status: u16 },
}

/// Result of one environment query.
///
/// A response that parses but lacks the expected row path is a named
/// `ShapeMismatch`, not an error: the caller degrades it to an empty row
/// set so rendering keeps working when the query shape drifts.
#[derive(Debug)]
pub enum QueryOutcome {
    Rows(Vec<EnvRecord>),
    ShapeMismatch,
}

#[async_trait]
pub trait TelemetryRepository: Send + Sync {
    /// Issue exactly one environment query for the window and bucket code.
    /// No retry, no backoff; partial results are never accepted.
    async fn fetch_env(
        &self,
        range: TimeRange,
        bucket: BucketCode,
    ) -> Result<QueryOutcome, FetchError>;

    /// Forward a raw GraphQL request body verbatim and return the upstream
    /// response document.
    async fn passthrough(
        &self,
        request: serde_json::Value,
    ) -> Result<serde_json::Value, FetchError>;
}
