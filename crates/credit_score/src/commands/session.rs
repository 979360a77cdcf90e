//! Session command - interactive scoring loop with an in-memory history.

use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use burn::prelude::*;
use chrono::Local;
use client_records::{ClientRecord, CreditExperience, PredictionResult};
use config::Config;
use credit_model::CreditModel;
use tracing::{info, warn};

use crate::history::SessionHistory;

/// Runs the interactive session.
///
/// Reads one client per stdin line (`<age> <income> <credit_score>
/// <experience>`), scores and logs each, and prints the session history at
/// the end. A line that fails to parse or score is reported and skipped;
/// the session itself keeps going.
///
/// # Errors
///
/// Returns an error only if stdin itself becomes unreadable.
pub fn run<B: Backend>(
    model: &CreditModel<B>,
    device: &B::Device,
    config: &Config,
) -> Result<()> {
    info!("Enter one client per line: <age> <income> <credit_score> <experience>");
    info!("Blank line or end-of-input finishes the session");

    let mut history = SessionHistory::new();
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }

        match score_line(model, device, config, trimmed) {
            Ok(result) => {
                history.record(&result, Local::now());
                info!(
                    "{} | probability {:.1}% | {}",
                    result.decision_label(),
                    result.probability * 100.0,
                    result.risk_band()
                );
            }
            Err(error) => warn!(%error, "client not scored"),
        }
    }

    if history.is_empty() {
        info!("No clients scored this session");
    } else {
        info!("=== Session History ({} decisions) ===", history.len());
        for item in history.items() {
            info!("  {}  {:<8}  {}", item.time, item.decision, item.probability);
        }
    }

    Ok(())
}

fn score_line<B: Backend>(
    model: &CreditModel<B>,
    device: &B::Device,
    config: &Config,
    line: &str,
) -> Result<PredictionResult> {
    let record = parse_line(line)?;
    super::score::score_and_log(model, device, config, &record)
}

/// Parses one session line into a validated client record.
fn parse_line(line: &str) -> Result<ClientRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        bail!("expected 4 values: <age> <income> <credit_score> <experience>");
    }

    let age = fields[0].parse().context("age must be an integer")?;
    let income = fields[1].parse().context("income must be an integer")?;
    let credit_score = fields[2].parse().context("credit score must be an integer")?;
    let experience: CreditExperience = fields[3].parse()?;

    ClientRecord::new(age, income, credit_score, experience)
}
