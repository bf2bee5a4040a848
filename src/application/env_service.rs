// Environment window service - Use case for one chart fetch cycle
use crate::application::telemetry_repository::{FetchError, QueryOutcome, TelemetryRepository};
use crate::domain::series::derive_fan_on_series;
use crate::domain::telemetry::{BucketCode, EnvRecord, TimeRange};
use std::sync::Arc;

/// One fetch cycle's worth of chart data: the raw rows plus the derived
/// fan-on water-temperature series over the same x-axis.
#[derive(Debug)]
pub struct EnvWindow {
    pub rows: Vec<EnvRecord>,
    pub fan_on: Vec<EnvRecord>,
}

#[derive(Clone)]
pub struct EnvService {
    repository: Arc<dyn TelemetryRepository>,
}

impl EnvService {
    pub fn new(repository: Arc<dyn TelemetryRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the window and attach the derived series. A shape mismatch
    /// degrades to an empty window instead of failing.
    pub async fn fetch_window(
        &self,
        range: TimeRange,
        bucket: BucketCode,
    ) -> Result<EnvWindow, FetchError> {
        let rows = match self.repository.fetch_env(range, bucket).await? {
            QueryOutcome::Rows(rows) => rows,
            QueryOutcome::ShapeMismatch => {
                tracing::warn!(
                    start_at = range.start_at,
                    end_at = range.end_at,
                    "telemetry response missing expected row path, treating as empty"
                );
                Vec::new()
            }
        };
        let fan_on = derive_fan_on_series(&rows);
        Ok(EnvWindow { rows, fan_on })
    }

    pub async fn passthrough(
        &self,
        request: serde_json::Value,
    ) -> Result<serde_json::Value, FetchError> {
        self.repository.passthrough(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::FanState;
    use async_trait::async_trait;

    enum Scripted {
        Rows(Vec<EnvRecord>),
        ShapeMismatch,
        Upstream(u16),
    }

    struct ScriptedRepository(Scripted);

    #[async_trait]
    impl TelemetryRepository for ScriptedRepository {
        async fn fetch_env(
            &self,
            _range: TimeRange,
            _bucket: BucketCode,
        ) -> Result<QueryOutcome, FetchError> {
            match &self.0 {
                Scripted::Rows(rows) => Ok(QueryOutcome::Rows(rows.clone())),
                Scripted::ShapeMismatch => Ok(QueryOutcome::ShapeMismatch),
                Scripted::Upstream(status) => Err(FetchError::Upstream { status: *status }),
            }
        }

        async fn passthrough(
            &self,
            request: serde_json::Value,
        ) -> Result<serde_json::Value, FetchError> {
            Ok(request)
        }
    }

    fn record(unit_time: i64, water_temp: Option<f64>, fan_sw: FanState) -> EnvRecord {
        EnvRecord {
            id: unit_time.to_string(),
            date: "2024-01-01".to_string(),
            time: "00:00:00".to_string(),
            unixtime: unit_time,
            unit_time,
            air_temp: 18.2,
            water_temp,
            time_group: BucketCode(10),
            fan_sw,
        }
    }

    fn range() -> TimeRange {
        TimeRange::new(1704067200, 1704153600)
    }

    #[tokio::test]
    async fn test_window_carries_masked_series() {
        let service = EnvService::new(Arc::new(ScriptedRepository(Scripted::Rows(vec![
            record(1704067200, Some(24.1), FanState::Off),
            record(1704070800, Some(24.3), FanState::On),
        ]))));
        let window = service.fetch_window(range(), BucketCode(10)).await.unwrap();
        assert_eq!(window.rows[0].water_temp, Some(24.1));
        assert_eq!(window.fan_on[0].water_temp, None);
        assert_eq!(window.fan_on[1].water_temp, Some(24.3));
    }

    #[tokio::test]
    async fn test_shape_mismatch_degrades_to_empty_window() {
        let service = EnvService::new(Arc::new(ScriptedRepository(Scripted::ShapeMismatch)));
        let window = service.fetch_window(range(), BucketCode(10)).await.unwrap();
        assert!(window.rows.is_empty());
        assert!(window.fan_on.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let service = EnvService::new(Arc::new(ScriptedRepository(Scripted::Upstream(500))));
        let result = service.fetch_window(range(), BucketCode(10)).await;
        assert!(matches!(result, Err(FetchError::Upstream { status: 500 })));
    }
}
