//! Feature extractor crate for the credit approval model.
//!
//! This crate transforms validated client records into the fixed-width
//! numeric feature vectors the classifier consumes.

use client_records::ClientRecord;

/// The number of features the classifier consumes per client:
/// age, monthly income, credit score and credit experience level,
/// in that order.
pub const FEATURE_COUNT: usize = 4;

/// Canonical column names for the four features, in model input order.
/// Batch inputs and the prediction log both use these legacy names.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] =
    ["idade", "renda", "score_credito", "experiencia_credito"];

/// Extracts the model input vector from a client record.
///
/// Attribute values are fed to the model unscaled, in canonical column
/// order. The trained artifact expects exactly this layout.
#[must_use]
pub fn extract_client_features(record: &ClientRecord) -> [f32; FEATURE_COUNT] {
    [
        record.age() as f32,
        record.monthly_income() as f32,
        record.credit_score() as f32,
        f32::from(record.credit_experience().level()),
    ]
}

#[cfg(test)]
mod tests {
    use client_records::CreditExperience;

    use super::*;

    #[test]
    fn test_feature_order_matches_columns() {
        let record =
            ClientRecord::new(35, 5000, 650, CreditExperience::Moderate).expect("valid record");
        let features = extract_client_features(&record);

        assert_eq!(features.len(), FEATURE_COUNT);
        assert!((features[0] - 35.0).abs() < f32::EPSILON);
        assert!((features[1] - 5000.0).abs() < f32::EPSILON);
        assert!((features[2] - 650.0).abs() < f32::EPSILON);
        assert!((features[3] - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_column_names() {
        assert_eq!(
            FEATURE_COLUMNS,
            ["idade", "renda", "score_credito", "experiencia_credito"]
        );
    }
}
