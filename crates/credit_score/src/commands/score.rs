//! Score command - scores one client and appends the outcome to the
//! prediction log.

use anyhow::{Context, Result};
use burn::prelude::*;
use chrono::Utc;
use client_records::{ClientRecord, CreditExperience, analyze_factors};
use config::Config;
use credit_model::CreditModel;
use prediction_log::{LogEntry, PredictionLog};
use tracing::{info, warn};

/// Runs the score command.
///
/// # Errors
///
/// Returns an error if the attributes are out of range or inference fails.
/// A prediction-log write failure is only warned about; the result shown to
/// the user stands.
pub fn run<B: Backend>(
    model: &CreditModel<B>,
    device: &B::Device,
    config: &Config,
    age: u32,
    income: u32,
    credit_score: u32,
    experience: u8,
) -> Result<()> {
    let experience = CreditExperience::from_level(experience)
        .context("credit experience level must be between 0 and 4")?;
    let record = ClientRecord::new(age, income, credit_score, experience)?;

    let result = score_and_log(model, device, config, &record)?;

    info!("=== Credit Analysis Result ===");
    info!("Decision:      {}", result.decision_label());
    info!("Probability:   {:.1}%", result.probability * 100.0);
    info!("Risk category: {}", result.risk_band());

    info!("=== Factor Analysis ===");
    for factor in analyze_factors(&record) {
        info!("  {:<13} {:<32} {}", factor.factor, factor.value, factor.impact);
    }

    Ok(())
}

/// Scores a record and appends the outcome to the prediction log.
///
/// A failed append is warned about and the prediction stands.
pub(crate) fn score_and_log<B: Backend>(
    model: &CreditModel<B>,
    device: &B::Device,
    config: &Config,
    record: &ClientRecord,
) -> Result<client_records::PredictionResult> {
    let result = credit_model::score_client(model, record, device)?;

    let log = PredictionLog::new(config.log_path.clone());
    let entry = LogEntry::new(record, &result, Utc::now());
    if let Err(error) = log.append(&entry) {
        warn!(
            path = %log.path().display(),
            %error,
            "failed to append to the prediction log"
        );
    }

    Ok(result)
}
