//! Environment-backed configuration for the credit scoring tools.

mod config;

pub use config::*;
