use chrono::{DateTime, Utc};
use client_records::{ClientRecord, PredictionResult};
use serde::{Deserialize, Serialize};

/// Column order of the prediction log. The Portuguese names are the legacy
/// wire format; existing logs with this header are appended to, anything
/// else is replaced.
pub const LOG_COLUMNS: [&str; 7] = [
    "timestamp",
    "idade",
    "renda",
    "score_credito",
    "experiencia_credito",
    "probabilidade",
    "predicao",
];

/// One scored client as persisted in the prediction log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the client was scored (RFC 3339, UTC).
    pub timestamp: DateTime<Utc>,

    #[serde(rename = "idade")]
    pub age: u32,

    #[serde(rename = "renda")]
    pub monthly_income: u32,

    #[serde(rename = "score_credito")]
    pub credit_score: u32,

    #[serde(rename = "experiencia_credito")]
    pub credit_experience: u8,

    #[serde(rename = "probabilidade")]
    pub probability: f32,

    /// 1 for approved, 0 for denied.
    #[serde(rename = "predicao")]
    pub decision: u8,
}

impl LogEntry {
    /// Builds the entry for one completed scoring.
    #[must_use]
    pub fn new(
        record: &ClientRecord,
        result: &PredictionResult,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            age: record.age(),
            monthly_income: record.monthly_income(),
            credit_score: record.credit_score(),
            credit_experience: record.credit_experience().level(),
            probability: result.probability,
            decision: u8::from(result.approved),
        }
    }

    /// Whether this entry recorded an approval.
    #[must_use]
    pub const fn approved(&self) -> bool {
        self.decision == 1
    }
}

#[cfg(test)]
mod tests {
    use client_records::CreditExperience;

    use super::*;

    #[test]
    fn test_entry_from_scoring() {
        let record =
            ClientRecord::new(35, 5000, 650, CreditExperience::Moderate).expect("valid record");
        let result = PredictionResult {
            probability: 0.82,
            approved: true,
        };
        let entry = LogEntry::new(&record, &result, Utc::now());

        assert_eq!(entry.age, 35);
        assert_eq!(entry.monthly_income, 5000);
        assert_eq!(entry.credit_score, 650);
        assert_eq!(entry.credit_experience, 2);
        assert_eq!(entry.decision, 1);
        assert!(entry.approved());
    }
}
