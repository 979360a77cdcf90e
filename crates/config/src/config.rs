use std::path::PathBuf;

/// Default checkpoint stem of the serialized classifier. The artifact
/// itself lives at `<stem>.mpk` with a `<stem>.config.json` sidecar.
const DEFAULT_MODEL_PATH: &str = "modelo_credito";

/// Default path of the prediction log CSV.
const DEFAULT_LOG_PATH: &str = "logs_predicoes.csv";

/// Application configuration loaded from environment variables.
///
/// Loaded once in `main` and passed down explicitly; nothing in the
/// workspace reads the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Checkpoint stem for the serialized classifier artifact.
    pub model_path: PathBuf,

    /// Path of the append-only prediction log CSV.
    pub log_path: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CREDIT_MODEL_PATH`: checkpoint stem (default: `modelo_credito`)
    /// - `PREDICTION_LOG_PATH`: prediction log CSV (default: `logs_predicoes.csv`)
    ///
    /// A `.env` file in the working directory is honored when present.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let model_path = std::env::var("CREDIT_MODEL_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH), PathBuf::from);

        let log_path = std::env::var("PREDICTION_LOG_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_LOG_PATH), PathBuf::from);

        Self {
            model_path,
            log_path,
        }
    }
}
