//! Per-session history of scoring decisions.
//!
//! Lives only in process memory and dies with the session; the durable
//! record of predictions is the CSV log, not this.

use chrono::{DateTime, Local};
use client_records::PredictionResult;

/// One past decision as shown in the session history.
#[derive(Debug, Clone)]
pub struct HistoryItem {
    /// Time of day the client was scored (HH:MM:SS).
    pub time: String,
    /// Wire decision label (`Aprovado` / `Negado`).
    pub decision: &'static str,
    /// Probability formatted for display.
    pub probability: String,
}

/// Ordered list of the decisions made during one session.
#[derive(Debug, Default)]
pub struct SessionHistory {
    items: Vec<HistoryItem>,
}

impl SessionHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Records one completed scoring.
    pub fn record(&mut self, result: &PredictionResult, at: DateTime<Local>) {
        self.items.push(HistoryItem {
            time: at.format("%H:%M:%S").to_string(),
            decision: result.decision_label(),
            probability: format!("{:.1}%", result.probability * 100.0),
        });
    }

    /// Returns the recorded items, oldest first.
    #[must_use]
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    /// Returns the number of recorded decisions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing was scored yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
