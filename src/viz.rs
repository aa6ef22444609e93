//! Chart Data Shaping
//!
//! Pure helpers behind the visualization and history views, kept out of the
//! components so they can be tested off-browser.

use chrono::NaiveDateTime;

use crate::models::HistoryEntry;

/// Sliding-window capacity of the live trend chart.
pub const TREND_CAPACITY: usize = 20;

/// Append a point, evicting from the front once the window is full.
pub fn push_trend<T>(window: &mut Vec<T>, value: T) {
    window.push(value);
    if window.len() > TREND_CAPACITY {
        window.remove(0);
    }
}

/// Map history entries to the predictions-over-time line: day label per
/// point, `Diabetic` as 1, anything else as 0.
pub fn outcome_series(entries: &[HistoryEntry]) -> (Vec<String>, Vec<u8>) {
    let labels = entries.iter().map(|e| format_day(&e.timestamp)).collect();
    let values = entries
        .iter()
        .map(|e| u8::from(e.prediction == "Diabetic"))
        .collect();
    (labels, values)
}

fn parse_timestamp(ts: &str) -> Option<NaiveDateTime> {
    // The API reports naive UTC ISO timestamps with optional fraction;
    // tolerate an explicit offset too.
    chrono::DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// `dd/mm/yyyy`, falling back to the raw string when unparseable.
pub fn format_day(ts: &str) -> String {
    parse_timestamp(ts)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// `dd/mm/yyyy, HH:MM:SS`, falling back to the raw string when unparseable.
pub fn format_day_time(ts: &str) -> String {
    parse_timestamp(ts)
        .map(|dt| dt.format("%d/%m/%Y, %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn entry(timestamp: &str, prediction: &str) -> HistoryEntry {
        HistoryEntry {
            timestamp: timestamp.to_string(),
            prediction: prediction.to_string(),
            model: "RandomForest".to_string(),
            probability: Some(0.5),
            inputs: BTreeMap::new(),
        }
    }

    #[test]
    fn test_push_trend_caps_window() {
        let mut window = Vec::new();
        for i in 0..25u32 {
            push_trend(&mut window, i);
            assert!(window.len() <= TREND_CAPACITY);
        }
        assert_eq!(window.len(), TREND_CAPACITY);
        // Oldest points were evicted from the front, order preserved.
        assert_eq!(window.first(), Some(&5));
        assert_eq!(window.last(), Some(&24));
    }

    #[test]
    fn test_outcome_series_maps_labels() {
        let entries = vec![
            entry("2024-02-08T15:40:28.123456", "Diabetic"),
            entry("2024-02-09T09:01:02", "Not Diabetic"),
        ];
        let (labels, values) = outcome_series(&entries);
        assert_eq!(labels, vec!["08/02/2024", "09/02/2024"]);
        assert_eq!(values, vec![1, 0]);
    }

    #[test]
    fn test_format_day_time() {
        assert_eq!(
            format_day_time("2024-02-08T15:40:28"),
            "08/02/2024, 15:40:28"
        );
    }

    #[test]
    fn test_format_accepts_offset_timestamps() {
        assert_eq!(format_day("2024-02-08T15:40:28+00:00"), "08/02/2024");
    }

    #[test]
    fn test_format_falls_back_to_raw() {
        assert_eq!(format_day("yesterday"), "yesterday");
        assert_eq!(format_day_time(""), "");
    }
}
