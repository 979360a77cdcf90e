//! Drift command - reports the trailing mean-age statistic from the
//! prediction log.

use anyhow::Result;
use chrono::Utc;
use config::Config;
use prediction_log::{DRIFT_WINDOW_DAYS, PredictionLog, mean_recent_age};
use tracing::info;

/// Runs the drift command.
///
/// # Errors
///
/// Never fails today; an unreadable log is treated as empty by the loader.
pub fn run(config: &Config) -> Result<()> {
    let log = PredictionLog::new(config.log_path.clone());
    let entries = log.load();

    match mean_recent_age(&entries, Utc::now()) {
        Some(mean) => {
            info!(entries = entries.len(), "prediction log loaded");
            info!("Mean client age ({DRIFT_WINDOW_DAYS}d): {mean:.1} years");
        }
        None => info!("Insufficient data to monitor drift yet"),
    }

    Ok(())
}
