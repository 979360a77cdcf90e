//! Credit Approval Scoring Toolkit
//!
//! A machine learning-based tool for scoring credit applications from
//! client records.

use std::path::PathBuf;

use anyhow::Result;
use burn::backend::NdArray;
use burn::backend::ndarray::NdArrayDevice;
use clap::{Parser, Subcommand};
use config::Config;
use credit_score::commands;
use tracing_subscriber::EnvFilter;

type Backend = NdArray;

/// Credit Approval Scoring Toolkit
#[derive(Parser)]
#[command(name = "credit-score")]
#[command(about = "ML-based credit approval analysis over client records")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single client and append the result to the prediction log
    Score {
        /// Client age in years (18-80)
        #[arg(short, long)]
        age: u32,

        /// Gross monthly income (0-50000)
        #[arg(short, long)]
        income: u32,

        /// Credit score (300-850)
        #[arg(short = 's', long)]
        credit_score: u32,

        /// Credit experience level (0-4)
        #[arg(short, long)]
        experience: u8,
    },

    /// Score clients interactively from stdin, keeping a session history
    Session,

    /// Score every row of a CSV file and write the augmented table
    Batch {
        /// Path to the CSV file with client rows
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the scored table (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report the trailing mean-age drift statistic from the prediction log
    Drift,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();
    let device = NdArrayDevice::default();

    match cli.command {
        Commands::Score {
            age,
            income,
            credit_score,
            experience,
        } => {
            // The artifact is loaded exactly once and handed down to every
            // scoring call; a load failure ends the run here.
            let model = credit_model::load_checkpoint::<Backend>(&config.model_path, &device)?;
            commands::score::run(&model, &device, &config, age, income, credit_score, experience)?;
        }
        Commands::Session => {
            let model = credit_model::load_checkpoint::<Backend>(&config.model_path, &device)?;
            commands::session::run(&model, &device, &config)?;
        }
        Commands::Batch { input, output } => {
            let model = credit_model::load_checkpoint::<Backend>(&config.model_path, &device)?;
            commands::batch::run(&model, &device, &input, output.as_deref())?;
        }
        Commands::Drift => {
            commands::drift::run(&config)?;
        }
    }

    Ok(())
}
