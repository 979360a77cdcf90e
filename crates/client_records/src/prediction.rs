use crate::RiskBand;

/// Decision label written to batch output and the session history for an
/// approved client. Kept in the legacy Portuguese wire format.
pub const APPROVED_LABEL: &str = "Aprovado";

/// Decision label for a denied client.
pub const DENIED_LABEL: &str = "Negado";

/// Outcome of scoring one client: the model's approval probability and the
/// boolean decision derived from it at the 0.5 threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub probability: f32,
    pub approved: bool,
}

impl PredictionResult {
    /// Returns the wire decision label (`Aprovado` / `Negado`).
    ///
    /// Every surface that renders a decision goes through this method so the
    /// log, batch output and session history can never disagree.
    #[must_use]
    pub const fn decision_label(&self) -> &'static str {
        if self.approved {
            APPROVED_LABEL
        } else {
            DENIED_LABEL
        }
    }

    /// Risk band for this prediction's probability.
    #[must_use]
    pub fn risk_band(&self) -> RiskBand {
        RiskBand::from_probability(self.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_labels() {
        let approved = PredictionResult {
            probability: 0.82,
            approved: true,
        };
        let denied = PredictionResult {
            probability: 0.31,
            approved: false,
        };
        assert_eq!(approved.decision_label(), "Aprovado");
        assert_eq!(denied.decision_label(), "Negado");
    }

    #[test]
    fn test_risk_band_passthrough() {
        let result = PredictionResult {
            probability: 0.55,
            approved: true,
        };
        assert_eq!(result.risk_band(), RiskBand::Medium);
    }
}
