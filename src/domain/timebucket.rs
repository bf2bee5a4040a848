// Time-bucket codec - wall-clock input to epoch seconds and back to labels
use chrono::{DateTime, Local, LocalResult, NaiveDateTime};

use crate::domain::telemetry::BucketCode;

/// Label emitted for an epoch value chrono cannot represent.
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

const COARSE_FORMAT: &str = "%Y/%m/%d";
const FINE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Interpret a wall-clock value in the runtime's local timezone and floor
/// it to whole epoch seconds.
///
/// A DST fold takes the earliest mapping; a nonexistent local time falls
/// back to the UTC reading.
pub fn to_epoch_seconds(local: NaiveDateTime) -> i64 {
    match local.and_local_timezone(Local) {
        LocalResult::Single(dt) => dt.timestamp(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp(),
        LocalResult::None => local.and_utc().timestamp(),
    }
}

/// Render a bucket timestamp for display.
///
/// Coarse bucket codes get the calendar date only, fine codes get date
/// plus time of day. Axis ticks and tooltips must both go through this
/// function with the active bucket code so the two never disagree.
pub fn format_label(epoch_seconds: i64, bucket: BucketCode) -> String {
    let Some(utc) = DateTime::from_timestamp(epoch_seconds, 0) else {
        return INVALID_DATE_LABEL.to_string();
    };
    let local = utc.with_timezone(&Local);
    if bucket.is_coarse() {
        local.format(COARSE_FORMAT).to_string()
    } else {
        local.format(FINE_FORMAT).to_string()
    }
}

/// Parse the `datetime-local` wire forms used by the range pickers.
pub fn parse_local_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}
