// Telemetry data domain models
use serde::{Deserialize, Serialize};

/// Bucket codes at or above this value are labeled with the calendar date
/// only; finer codes also carry the time of day.
pub const COARSE_LABEL_THRESHOLD: i32 = 20;

/// Aggregation granularity code, passed through to the remote source.
///
/// The code-to-interval mapping is owned by the remote side; locally the
/// only interpreted semantic is the coarse-label threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketCode(pub i32);

impl BucketCode {
    pub fn code(self) -> i32 {
        self.0
    }

    pub fn is_coarse(self) -> bool {
        self.0 >= COARSE_LABEL_THRESHOLD
    }
}

/// Query window in epoch seconds. `start_at <= end_at` is expected but not
/// enforced; an inverted window is still sent upstream and may yield an
/// empty result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start_at: i64,
    pub end_at: i64,
}

impl TimeRange {
    pub fn new(start_at: i64, end_at: i64) -> Self {
        Self { start_at, end_at }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FanState {
    On,
    Off,
}

impl FanState {
    pub fn is_on(self) -> bool {
        self == FanState::On
    }
}

// The upstream discriminator is the string "ON"; every other value means
// the fan is off.
impl<'de> Deserialize<'de> for FanState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == "ON" { FanState::On } else { FanState::Off })
    }
}

/// One time-bucketed sensor row as returned by the remote source.
///
/// `unit_time` is the bucket start in epoch seconds and the x-axis key.
/// Rows arrive ordered by `unit_time` ascending and are never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvRecord {
    pub id: String,
    pub date: String,
    pub time: String,
    pub unixtime: i64,
    pub unit_time: i64,
    pub air_temp: f64,
    pub water_temp: Option<f64>,
    pub time_group: BucketCode,
    pub fan_sw: FanState,
}
