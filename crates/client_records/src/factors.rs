use core::fmt;

use crate::ClientRecord;

/// Qualitative contribution of a single attribute to the scoring outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorImpact {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for FactorImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        };
        f.write_str(label)
    }
}

/// One row of the factor analysis shown alongside an interactive result.
#[derive(Debug, Clone)]
pub struct FactorAnalysis {
    pub factor: &'static str,
    pub value: String,
    pub impact: FactorImpact,
}

/// Rates each of the four attributes of a record against the fixed
/// heuristics used in the result display.
///
/// Age counts as positive inside the 25-55 band; income below 2000 and
/// credit score below 500 count against the client; experience helps from
/// the moderate level upwards.
#[must_use]
pub fn analyze_factors(record: &ClientRecord) -> Vec<FactorAnalysis> {
    let age_impact = if (25..=55).contains(&record.age()) {
        FactorImpact::Positive
    } else {
        FactorImpact::Neutral
    };

    let income_impact = if record.monthly_income() >= 4000 {
        FactorImpact::Positive
    } else if record.monthly_income() < 2000 {
        FactorImpact::Negative
    } else {
        FactorImpact::Neutral
    };

    let score_impact = if record.credit_score() >= 700 {
        FactorImpact::Positive
    } else if record.credit_score() < 500 {
        FactorImpact::Negative
    } else {
        FactorImpact::Neutral
    };

    let experience_impact = if record.credit_experience().level() >= 2 {
        FactorImpact::Positive
    } else {
        FactorImpact::Negative
    };

    vec![
        FactorAnalysis {
            factor: "Age",
            value: format!("{} years", record.age()),
            impact: age_impact,
        },
        FactorAnalysis {
            factor: "Income",
            value: record.monthly_income().to_string(),
            impact: income_impact,
        },
        FactorAnalysis {
            factor: "Credit score",
            value: record.credit_score().to_string(),
            impact: score_impact,
        },
        FactorAnalysis {
            factor: "Experience",
            value: record.credit_experience().label().to_string(),
            impact: experience_impact,
        },
    ]
}
