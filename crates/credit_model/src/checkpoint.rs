//! Checkpoint load/save for the credit approval model.
//!
//! The artifact is a Burn named-MessagePack record at `<stem>.mpk` with the
//! architecture stored in a `<stem>.config.json` sidecar.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use burn::prelude::*;
use burn::record::{FullPrecisionSettings, NamedMpkFileRecorder};
use tracing::{info, warn};

use crate::{CreditModel, ModelConfig};

type ArtifactRecorder = NamedMpkFileRecorder<FullPrecisionSettings>;

fn config_sidecar_path(stem: &Path) -> PathBuf {
    PathBuf::from(format!("{}.config.json", stem.to_string_lossy()))
}

/// Reads the architecture sidecar, falling back to the default
/// configuration when the sidecar is missing or unreadable.
fn load_model_config(stem: &Path) -> ModelConfig {
    let sidecar = config_sidecar_path(stem);
    if !sidecar.exists() {
        return ModelConfig::default();
    }

    match std::fs::read_to_string(&sidecar) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(error) => {
                warn!(
                    sidecar = %sidecar.display(),
                    %error,
                    "model config sidecar is unreadable, using defaults"
                );
                ModelConfig::default()
            }
        },
        Err(error) => {
            warn!(
                sidecar = %sidecar.display(),
                %error,
                "failed to read model config sidecar, using defaults"
            );
            ModelConfig::default()
        }
    }
}

/// Loads the serialized classifier from `<stem>.mpk`.
///
/// Intended to be called once per process lifetime; the returned model is
/// read-only and passed down to every scoring call.
///
/// # Errors
///
/// Returns an error if the artifact is missing or cannot be deserialized.
/// Either failure leaves all scoring unavailable until the artifact is
/// restored externally.
pub fn load_checkpoint<B: Backend>(stem: &Path, device: &B::Device) -> Result<CreditModel<B>> {
    let artifact = stem.with_extension("mpk");
    if !artifact.exists() {
        bail!("model artifact not found at {}", artifact.display());
    }

    let config = load_model_config(stem);
    let recorder = ArtifactRecorder::new();

    let model = CreditModel::new(device, &config)
        .load_file(stem, &recorder, device)
        .with_context(|| {
            format!(
                "failed to deserialize model artifact at {}",
                artifact.display()
            )
        })?;

    info!(artifact = %artifact.display(), "loaded credit model");
    Ok(model)
}

/// Saves a model checkpoint and its architecture sidecar.
///
/// Used by external artifact tooling; the scoring paths only ever load.
///
/// # Errors
///
/// Returns an error if the checkpoint or sidecar cannot be written.
pub fn save_checkpoint<B: Backend>(
    model: CreditModel<B>,
    config: &ModelConfig,
    stem: &Path,
) -> Result<()> {
    if let Some(parent) = stem.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let recorder = ArtifactRecorder::new();
    model
        .save_file(stem, &recorder)
        .with_context(|| format!("failed to write model artifact at {}.mpk", stem.display()))?;

    let sidecar = config_sidecar_path(stem);
    let raw = serde_json::to_string_pretty(config).context("failed to serialize model config")?;
    std::fs::write(&sidecar, raw)
        .with_context(|| format!("failed to write {}", sidecar.display()))?;

    Ok(())
}
