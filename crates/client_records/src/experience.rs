use core::str::FromStr;

/// Client credit experience level, ordered from no history to extensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CreditExperience {
    NoHistory,
    Limited,
    Moderate,
    Good,
    Extensive,
}

impl CreditExperience {
    /// Returns the experience level for a numeric code (0..=4).
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::NoHistory),
            1 => Some(Self::Limited),
            2 => Some(Self::Moderate),
            3 => Some(Self::Good),
            4 => Some(Self::Extensive),
            _ => None,
        }
    }

    /// Returns the numeric code used by the model and the prediction log.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::NoHistory => 0,
            Self::Limited => 1,
            Self::Moderate => 2,
            Self::Good => 3,
            Self::Extensive => 4,
        }
    }

    /// Returns the human-readable label for this level.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoHistory => "No credit history",
            Self::Limited => "Limited experience (1-2 years)",
            Self::Moderate => "Moderate experience (3-5 years)",
            Self::Good => "Good experience (6-10 years)",
            Self::Extensive => "Extensive experience (10+ years)",
        }
    }

    /// Iterates over all levels in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::NoHistory,
            Self::Limited,
            Self::Moderate,
            Self::Good,
            Self::Extensive,
        ]
        .into_iter()
    }
}

impl FromStr for CreditExperience {
    type Err = anyhow::Error;

    /// Parses the numeric code used on the CLI and in CSV cells.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let level: u8 = s
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid credit experience level: {s}"))?;
        Self::from_level(level)
            .ok_or_else(|| anyhow::anyhow!("Credit experience level out of range (0-4): {level}"))
    }
}
