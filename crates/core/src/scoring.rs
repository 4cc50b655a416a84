//! Severity scoring and classification.

use crate::constants::{
    HIGH_DOSAGE_THRESHOLD_MG, HIGH_SCORE_LIMIT, MODERATE_SCORE_LIMIT, SAFE_SCORE_LIMIT,
    VERY_HIGH_DOSAGE_THRESHOLD_MG,
};
use crate::rules::InteractionRule;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sum of the severities of `rules`. Not clamped.
pub fn score(rules: &[InteractionRule]) -> u32 {
    rules.iter().map(|r| r.severity).sum()
}

/// Four-tier risk classification derived from a severity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Safe,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// Classifies a score. Each threshold is the exclusive upper bound of its tier.
    pub const fn from_score(score: u32) -> Self {
        if score < SAFE_SCORE_LIMIT {
            Self::Safe
        } else if score < MODERATE_SCORE_LIMIT {
            Self::Moderate
        } else if score < HIGH_SCORE_LIMIT {
            Self::High
        } else {
            Self::Critical
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative tier of a combined dosage.
///
/// Shared by the dosage rule and the rendered message so both use the same boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DosageTier {
    Acceptable,
    High,
    VeryHigh,
}

impl DosageTier {
    pub const fn from_total(total_mg: u64) -> Self {
        // >1500 must be checked before >1000.
        if total_mg > VERY_HIGH_DOSAGE_THRESHOLD_MG {
            Self::VeryHigh
        } else if total_mg > HIGH_DOSAGE_THRESHOLD_MG {
            Self::High
        } else {
            Self::Acceptable
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Acceptable => "Acceptable",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ConflictKind, InteractionRule};

    fn rule(severity: u32) -> InteractionRule {
        InteractionRule::new(ConflictKind::CategoryConflict, severity, "test")
    }

    #[test]
    fn score_sums_severities() {
        assert_eq!(score(&[]), 0);
        assert_eq!(score(&[rule(70), rule(15)]), 85);
        assert_eq!(score(&[rule(70), rule(40), rule(90)]), 200);
    }

    #[test]
    fn empty_rules_classify_as_safe() {
        assert_eq!(RiskLevel::from_score(score(&[])), RiskLevel::Safe);
    }

    #[test]
    fn classification_boundaries_belong_to_the_upper_tier() {
        for s in 0..200 {
            let expected = match s {
                0..=29 => RiskLevel::Safe,
                30..=59 => RiskLevel::Moderate,
                60..=89 => RiskLevel::High,
                _ => RiskLevel::Critical,
            };
            assert_eq!(RiskLevel::from_score(s), expected, "score {s}");
        }
        assert_eq!(RiskLevel::from_score(u32::MAX), RiskLevel::Critical);
    }

    #[test]
    fn risk_levels_are_ordered() {
        assert!(RiskLevel::Safe < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn risk_level_wire_names() {
        assert_eq!(RiskLevel::Critical.to_string(), "CRITICAL");
        assert_eq!(
            serde_json::to_string(&RiskLevel::Moderate).unwrap(),
            "\"MODERATE\""
        );
        assert_eq!(
            serde_json::from_str::<RiskLevel>("\"HIGH\"").unwrap(),
            RiskLevel::High
        );
        assert!(serde_json::from_str::<RiskLevel>("\"high\"").is_err());
    }

    #[test]
    fn dosage_tiers() {
        assert_eq!(DosageTier::from_total(0), DosageTier::Acceptable);
        assert_eq!(DosageTier::from_total(1000), DosageTier::Acceptable);
        assert_eq!(DosageTier::from_total(1001), DosageTier::High);
        assert_eq!(DosageTier::from_total(1500), DosageTier::High);
        assert_eq!(DosageTier::from_total(1501), DosageTier::VeryHigh);
        assert_eq!(DosageTier::VeryHigh.label(), "Very High");
    }
}
