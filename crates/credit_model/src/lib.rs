//! Model provider crate for credit approval scoring.
//!
//! This crate uses the Burn deep learning framework to load a pre-trained
//! binary classifier and run inference over the four client features. The
//! artifact is produced by an external training process; nothing here
//! trains.

use anyhow::bail;
use burn::nn::{Linear, LinearConfig, Relu};
use burn::prelude::*;
use burn::tensor::activation::sigmoid;
use client_records::{ClientRecord, PredictionResult};
use feature_extractor::{FEATURE_COUNT, extract_client_features};
use serde::{Deserialize, Serialize};

mod checkpoint;

pub use checkpoint::{load_checkpoint, save_checkpoint};

/// Approval probability at or above which a client is approved.
///
/// This is the single decision cut shared by every scoring path.
pub const DECISION_THRESHOLD: f32 = 0.5;

/// Architecture configuration for the credit approval model.
///
/// Persisted as a JSON sidecar next to the checkpoint so inference can
/// rebuild the exact network the artifact was trained with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Number of hidden units in the first layer.
    pub hidden_size_1: usize,
    /// Number of hidden units in the second layer.
    pub hidden_size_2: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            hidden_size_1: 32,
            hidden_size_2: 16,
        }
    }
}

/// The credit approval classifier.
///
/// A small feedforward network over the four client features producing a
/// single approval logit; `sigmoid` turns it into a probability.
#[derive(Module, Debug)]
pub struct CreditModel<B: Backend> {
    linear1: Linear<B>,
    linear2: Linear<B>,
    linear_out: Linear<B>,
    activation: Relu,
}

impl<B: Backend> CreditModel<B> {
    /// Creates a model with freshly initialized weights.
    pub fn new(device: &B::Device, config: &ModelConfig) -> Self {
        let linear1 = LinearConfig::new(FEATURE_COUNT, config.hidden_size_1).init(device);
        let linear2 = LinearConfig::new(config.hidden_size_1, config.hidden_size_2).init(device);
        let linear_out = LinearConfig::new(config.hidden_size_2, 1).init(device);
        let activation = Relu::new();

        Self {
            linear1,
            linear2,
            linear_out,
            activation,
        }
    }

    /// Forward pass through the network.
    ///
    /// # Arguments
    ///
    /// * `input` - Tensor of shape [`batch_size`, `FEATURE_COUNT`]
    ///
    /// # Returns
    ///
    /// Tensor of shape [`batch_size`, 1] containing approval logits.
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.linear1.forward(input);
        let x = self.activation.forward(x);
        let x = self.linear2.forward(x);
        let x = self.activation.forward(x);
        self.linear_out.forward(x)
    }
}

/// Computes approval probabilities for a batch of feature rows.
///
/// Every row must be exactly [`FEATURE_COUNT`] wide; a row of any other
/// width fails the whole call without touching the model. This is the only
/// shape guard in the system, so batch inputs that fell through to the
/// positional path end up here.
///
/// # Errors
///
/// Returns an error on a feature-count mismatch or if the model output
/// cannot be read back from the backend.
pub fn predict_proba<B: Backend>(
    model: &CreditModel<B>,
    rows: &[Vec<f32>],
    device: &B::Device,
) -> anyhow::Result<Vec<f32>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    for (index, row) in rows.iter().enumerate() {
        if row.len() != FEATURE_COUNT {
            bail!(
                "input row {index} has {} features, model expects {FEATURE_COUNT}",
                row.len()
            );
        }
    }

    let batch_size = rows.len();
    let mut input_data = Vec::with_capacity(batch_size * FEATURE_COUNT);
    for row in rows {
        input_data.extend_from_slice(row);
    }

    let input = Tensor::<B, 1>::from_floats(input_data.as_slice(), device)
        .reshape([batch_size, FEATURE_COUNT]);

    let probabilities = sigmoid(model.forward(input));

    probabilities
        .into_data()
        .to_vec::<f32>()
        .map_err(|e| anyhow::anyhow!("failed to read probabilities from backend: {e:?}"))
}

/// Computes boolean approval decisions for a batch of feature rows.
///
/// # Errors
///
/// Propagates the same failures as [`predict_proba`].
pub fn predict<B: Backend>(
    model: &CreditModel<B>,
    rows: &[Vec<f32>],
    device: &B::Device,
) -> anyhow::Result<Vec<bool>> {
    let probabilities = predict_proba(model, rows, device)?;
    Ok(probabilities
        .into_iter()
        .map(|p| p >= DECISION_THRESHOLD)
        .collect())
}

/// Scores a single validated client record.
///
/// # Errors
///
/// Returns an error if inference fails.
pub fn score_client<B: Backend>(
    model: &CreditModel<B>,
    record: &ClientRecord,
    device: &B::Device,
) -> anyhow::Result<PredictionResult> {
    let features = extract_client_features(record);
    let probabilities = predict_proba(model, &[features.to_vec()], device)?;

    let probability = probabilities
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("model returned no probability for a single-row input"))?;

    Ok(PredictionResult {
        probability,
        approved: probability >= DECISION_THRESHOLD,
    })
}
