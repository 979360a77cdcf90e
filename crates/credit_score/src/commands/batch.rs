//! Batch command - scores every row of an uploaded CSV table.

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use burn::prelude::*;
use credit_model::CreditModel;
use tracing::info;

/// Runs the batch command.
///
/// Batch results are written to the output file (or stdout) only; they are
/// never appended to the prediction log.
///
/// # Errors
///
/// Returns an error if the input cannot be read, a row cannot be scored, or
/// the output cannot be written. The failure aborts this batch only.
pub fn run<B: Backend>(
    model: &CreditModel<B>,
    device: &B::Device,
    input: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let file = File::open(input)
        .with_context(|| format!("failed to open batch file {}", input.display()))?;

    let scored = match output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            batch_scorer::score_batch(model, device, file, out)?
        }
        None => batch_scorer::score_batch(model, device, file, io::stdout().lock())?,
    };

    info!(rows = scored, "batch scoring complete");
    if let Some(path) = output {
        info!(output = %path.display(), "scored table written");
    }

    Ok(())
}
