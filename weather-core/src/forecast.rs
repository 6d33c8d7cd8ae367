//! Derivation of the daily forecast view and timestamp display helpers.

use std::collections::HashSet;

use chrono::{DateTime, Local};

use crate::model::ForecastEntry;

/// Upper bound on the derived daily view.
pub const MAX_DAILY_ENTRIES: usize = 6;

/// Reduce the raw 3-hour forecast list to one entry per calendar date.
///
/// The kept entry per date is whichever one appears FIRST in provider order
/// (not an average, not the warmest); later same-day entries are discarded.
/// Output preserves first-occurrence order and is capped at
/// [`MAX_DAILY_ENTRIES`]. Cheap enough to recompute on every render, so it is
/// never cached.
pub fn daily_forecast(entries: &[ForecastEntry]) -> Vec<&ForecastEntry> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut daily = Vec::new();

    for entry in entries {
        if seen.insert(entry.date_key()) {
            daily.push(entry);
            if daily.len() == MAX_DAILY_ENTRIES {
                break;
            }
        }
    }

    daily
}

/// Short weekday/month/day label for a UNIX-seconds timestamp, in the viewing
/// device's local timezone, e.g. "Mon Jan 1".
pub fn format_day(unix_seconds: i64) -> String {
    match local_datetime(unix_seconds) {
        Some(dt) => dt.format("%a %b %-d").to_string(),
        None => "--".to_string(),
    }
}

/// Hour:minute label for a UNIX-seconds timestamp in local time, e.g. "15:00".
pub fn format_time(unix_seconds: i64) -> String {
    match local_datetime(unix_seconds) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

fn local_datetime(unix_seconds: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp(unix_seconds, 0).map(|utc| utc.with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(dt_txt: &str, temperature_c: f64) -> ForecastEntry {
        ForecastEntry {
            dt: 0,
            dt_txt: dt_txt.to_string(),
            temperature_c,
            description: "clouds".to_string(),
            icon: "04d".to_string(),
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(daily_forecast(&[]).is_empty());
    }

    #[test]
    fn single_date_key_keeps_only_first_entry() {
        let entries = vec![
            entry("2024-01-01 00:00:00", 1.0),
            entry("2024-01-01 03:00:00", 2.0),
            entry("2024-01-01 06:00:00", 3.0),
        ];
        let daily = daily_forecast(&entries);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].temperature_c, 1.0);
    }

    #[test]
    fn later_same_day_entry_never_displaces_first() {
        let entries = vec![
            entry("2024-01-01 00:00:00", -5.0),
            entry("2024-01-01 12:00:00", 20.0),
        ];
        let daily = daily_forecast(&entries);
        assert_eq!(daily[0].temperature_c, -5.0);
    }

    #[test]
    fn caps_at_six_distinct_dates_in_input_order() {
        let mut entries = Vec::new();
        for day in 1..=8 {
            entries.push(entry(&format!("2024-01-{day:02} 00:00:00"), day as f64));
            entries.push(entry(&format!("2024-01-{day:02} 03:00:00"), 100.0));
        }
        let daily = daily_forecast(&entries);
        assert_eq!(daily.len(), 6);
        let keys: Vec<&str> = daily.iter().map(|e| e.date_key()).collect();
        assert_eq!(
            keys,
            [
                "2024-01-01",
                "2024-01-02",
                "2024-01-03",
                "2024-01-04",
                "2024-01-05",
                "2024-01-06"
            ]
        );
        assert!(daily.iter().all(|e| e.temperature_c < 100.0));
    }

    #[test]
    fn fewer_than_six_dates_returns_all_in_first_seen_order() {
        // Provider order is preserved even when it is not sorted by date.
        let entries = vec![
            entry("2024-01-03 00:00:00", 3.0),
            entry("2024-01-01 00:00:00", 1.0),
            entry("2024-01-02 00:00:00", 2.0),
            entry("2024-01-01 06:00:00", 9.0),
        ];
        let daily = daily_forecast(&entries);
        let keys: Vec<&str> = daily.iter().map(|e| e.date_key()).collect();
        assert_eq!(keys, ["2024-01-03", "2024-01-01", "2024-01-02"]);
    }

    #[test]
    fn concrete_two_day_scenario() {
        let entries = vec![
            entry("2024-01-01 03:00:00", 1.0),
            entry("2024-01-01 06:00:00", 2.0),
            entry("2024-01-02 03:00:00", 3.0),
        ];
        let daily = daily_forecast(&entries);
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].temperature_c, 1.0);
        assert_eq!(daily[1].temperature_c, 3.0);
    }

    #[test]
    fn day_label_has_no_time_component() {
        let label = format_day(1_704_103_200);
        assert!(!label.is_empty());
        assert!(!label.contains(':'));
    }

    #[test]
    fn time_label_is_hour_colon_minute() {
        // Exact value depends on the host timezone; the shape does not.
        let label = format_time(1_704_103_200);
        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
    }

    #[test]
    fn invalid_timestamp_falls_back_to_placeholder() {
        assert_eq!(format_time(i64::MAX), "--:--");
        assert_eq!(format_day(i64::MAX), "--");
    }
}
