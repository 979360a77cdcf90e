use anyhow::bail;

use crate::CreditExperience;

/// Valid age range for a scored client, in years.
pub const AGE_RANGE: core::ops::RangeInclusive<u32> = 18..=80;

/// Valid gross monthly income range, in currency units.
pub const INCOME_RANGE: core::ops::RangeInclusive<u32> = 0..=50_000;

/// Valid credit score range.
pub const CREDIT_SCORE_RANGE: core::ops::RangeInclusive<u32> = 300..=850;

/// The four client attributes the classifier scores, validated on
/// construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientRecord {
    age: u32,
    monthly_income: u32,
    credit_score: u32,
    credit_experience: CreditExperience,
}

impl ClientRecord {
    /// Builds a record after range-checking every attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if any attribute falls outside its valid range.
    pub fn new(
        age: u32,
        monthly_income: u32,
        credit_score: u32,
        credit_experience: CreditExperience,
    ) -> anyhow::Result<Self> {
        if !AGE_RANGE.contains(&age) {
            bail!(
                "age {age} outside valid range {}-{}",
                AGE_RANGE.start(),
                AGE_RANGE.end()
            );
        }
        if !INCOME_RANGE.contains(&monthly_income) {
            bail!(
                "monthly income {monthly_income} outside valid range {}-{}",
                INCOME_RANGE.start(),
                INCOME_RANGE.end()
            );
        }
        if !CREDIT_SCORE_RANGE.contains(&credit_score) {
            bail!(
                "credit score {credit_score} outside valid range {}-{}",
                CREDIT_SCORE_RANGE.start(),
                CREDIT_SCORE_RANGE.end()
            );
        }

        Ok(Self {
            age,
            monthly_income,
            credit_score,
            credit_experience,
        })
    }

    /// Client age in years.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Gross monthly income.
    #[must_use]
    pub const fn monthly_income(&self) -> u32 {
        self.monthly_income
    }

    /// Credit score (300-850).
    #[must_use]
    pub const fn credit_score(&self) -> u32 {
        self.credit_score
    }

    /// Credit experience level.
    #[must_use]
    pub const fn credit_experience(&self) -> CreditExperience {
        self.credit_experience
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_record() {
        let record = ClientRecord::new(35, 5000, 650, CreditExperience::Moderate);
        assert!(record.is_ok());
    }

    #[test]
    fn test_range_boundaries_accepted() {
        assert!(ClientRecord::new(18, 0, 300, CreditExperience::NoHistory).is_ok());
        assert!(ClientRecord::new(80, 50_000, 850, CreditExperience::Extensive).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(ClientRecord::new(17, 5000, 650, CreditExperience::Moderate).is_err());
        assert!(ClientRecord::new(81, 5000, 650, CreditExperience::Moderate).is_err());
        assert!(ClientRecord::new(35, 50_001, 650, CreditExperience::Moderate).is_err());
        assert!(ClientRecord::new(35, 5000, 299, CreditExperience::Moderate).is_err());
        assert!(ClientRecord::new(35, 5000, 851, CreditExperience::Moderate).is_err());
    }
}
