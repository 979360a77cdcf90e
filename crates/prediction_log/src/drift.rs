use chrono::{DateTime, Duration, Utc};

use crate::LogEntry;

/// Trailing window of the drift statistic, in days.
pub const DRIFT_WINDOW_DAYS: i64 = 30;

/// Mean client age over the entries scored in the trailing window.
///
/// Falls back to the mean over the entire log when no entry is recent
/// enough, and returns `None` (insufficient data) for an empty log.
#[must_use]
pub fn mean_recent_age(entries: &[LogEntry], now: DateTime<Utc>) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }

    let cutoff = now - Duration::days(DRIFT_WINDOW_DAYS);
    let recent: Vec<f64> = entries
        .iter()
        .filter(|entry| entry.timestamp >= cutoff)
        .map(|entry| f64::from(entry.age))
        .collect();

    let ages: Vec<f64> = if recent.is_empty() {
        entries.iter().map(|entry| f64::from(entry.age)).collect()
    } else {
        recent
    };

    Some(ages.iter().sum::<f64>() / ages.len() as f64)
}
