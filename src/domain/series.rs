// Derived fan-on series
use crate::domain::telemetry::EnvRecord;

/// Produce the secondary water-temperature series: rows keep their value
/// only while the fan is on, every other row gets a missing marker.
///
/// Plotted over the same x-axis as the raw rows this shows continuity
/// breaks exactly where the fan is off. Order and all other fields are
/// preserved.
pub fn derive_fan_on_series(rows: &[EnvRecord]) -> Vec<EnvRecord> {
    rows.iter()
        .cloned()
        .map(|mut row| {
            if !row.fan_sw.is_on() {
                row.water_temp = None;
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::{BucketCode, FanState};

    fn row(unit_time: i64, water_temp: Option<f64>, fan_sw: FanState) -> EnvRecord {
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

    #[test]
    fn test_masks_water_temp_unless_fan_is_on() {
        let rows = vec![
            row(1704067200, Some(24.1), FanState::Off),
            row(1704070800, Some(24.3), FanState::On),
        ];
        let derived = derive_fan_on_series(&rows);
        assert_eq!(derived[0].water_temp, None);
        assert_eq!(derived[1].water_temp, Some(24.3));
    }

    #[test]
    fn test_idempotent_on_masked_rows() {
        let rows = vec![
            row(1, None, FanState::Off),
            row(2, Some(25.0), FanState::On),
            row(3, Some(26.0), FanState::Off),
        ];
        let once = derive_fan_on_series(&rows);
        let twice = derive_fan_on_series(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_identity_on_all_other_fields() {
        let rows = vec![row(1704067200, Some(24.1), FanState::Off)];
        let derived = derive_fan_on_series(&rows);
        let (input, output) = (&rows[0], &derived[0]);
        assert_eq!(output.id, input.id);
        assert_eq!(output.date, input.date);
        assert_eq!(output.time, input.time);
        assert_eq!(output.unixtime, input.unixtime);
        assert_eq!(output.unit_time, input.unit_time);
        assert_eq!(output.air_temp, input.air_temp);
        assert_eq!(output.time_group, input.time_group);
        assert_eq!(output.fan_sw, input.fan_sw);
    }

    #[test]
    fn test_preserves_order_and_length() {
        let rows: Vec<EnvRecord> = (0..5)
            .map(|i| row(i, Some(i as f64), FanState::On))
            .collect();
        let derived = derive_fan_on_series(&rows);
        assert_eq!(derived.len(), rows.len());
        let times: Vec<i64> = derived.iter().map(|r| r.unit_time).collect();
        assert_eq!(times, vec![0, 1, 2, 3, 4]);
    }
}
