//! Pair interaction assessment.
//!
//! The assessor fetches both drugs, runs the rule engine and scoring, and produces a
//! [`PairVerdict`]. It never fails: if either drug cannot be retrieved it returns the fixed
//! degraded verdict instead.

use crate::constants::{
    DEGRADED_SEVERITY_SCORE, DRUGS_UNAVAILABLE_MESSAGE, INTERACTION_SERVICE_UNAVAILABLE_MESSAGE,
    UNKNOWN_DRUG_LABEL,
};
use crate::drug::{Drug, DrugId};
use crate::lookup::DrugLookup;
use crate::report;
use crate::rules::{self, InteractionRule};
use crate::scoring::{self, DosageTier, RiskLevel};
use crate::side_effects;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Risk verdict for exactly two drugs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairVerdict {
    pub drug_a: String,
    pub drug_b: String,
    pub risk_level: RiskLevel,
    pub severity_score: u32,
    pub message: String,
}

impl PairVerdict {
    /// Verdict used when one or both drugs could not be retrieved.
    ///
    /// Whichever side was retrieved keeps its real name.
    pub fn degraded(drug_a: Option<&Drug>, drug_b: Option<&Drug>) -> Self {
        let label = |drug: Option<&Drug>| {
            drug.map_or_else(|| UNKNOWN_DRUG_LABEL.to_string(), |d| d.name.clone())
        };

        Self {
            drug_a: label(drug_a),
            drug_b: label(drug_b),
            risk_level: RiskLevel::Moderate,
            severity_score: DEGRADED_SEVERITY_SCORE,
            message: DRUGS_UNAVAILABLE_MESSAGE.to_string(),
        }
    }

    /// Verdict used when a remote interaction service could not be reached at all.
    pub fn service_unavailable() -> Self {
        Self {
            drug_a: UNKNOWN_DRUG_LABEL.to_string(),
            drug_b: UNKNOWN_DRUG_LABEL.to_string(),
            risk_level: RiskLevel::Moderate,
            severity_score: DEGRADED_SEVERITY_SCORE,
            message: INTERACTION_SERVICE_UNAVAILABLE_MESSAGE.to_string(),
        }
    }
}

/// Structured result of assessing two retrieved drugs, before any rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairAssessment {
    pub drug_a: Drug,
    pub drug_b: Drug,
    pub rules: Vec<InteractionRule>,
    pub score: u32,
    pub risk_level: RiskLevel,
}

impl PairAssessment {
    pub fn compute(drug_a: Drug, drug_b: Drug) -> Self {
        let rules = rules::evaluate(Some(&drug_a), Some(&drug_b));
        let score = scoring::score(&rules);

        Self {
            drug_a,
            drug_b,
            rules,
            score,
            risk_level: RiskLevel::from_score(score),
        }
    }

    pub fn combined_dosage_mg(&self) -> u64 {
        self.drug_a.dosage_or_zero() + self.drug_b.dosage_or_zero()
    }

    pub fn dosage_tier(&self) -> DosageTier {
        DosageTier::from_total(self.combined_dosage_mg())
    }

    pub fn side_effect_summary(&self) -> String {
        side_effects::describe(Some(&self.drug_a), Some(&self.drug_b))
    }

    pub fn into_verdict(self) -> PairVerdict {
        let message = report::render_message(&self);
        PairVerdict {
            drug_a: self.drug_a.name,
            drug_b: self.drug_b.name,
            risk_level: self.risk_level,
            severity_score: self.score,
            message,
        }
    }
}

/// Something that can produce a verdict for a drug pair by id.
///
/// Implemented locally by [`PairAssessor`] and remotely by
/// [`HttpPairAnalyzer`](crate::remote::HttpPairAnalyzer). Implementations must not fail;
/// unavailable data degrades to a fixed verdict.
pub trait PairAnalyzer: Send + Sync {
    fn analyze_pair(&self, drug_a: DrugId, drug_b: DrugId) -> PairVerdict;
}

impl<T: PairAnalyzer + ?Sized> PairAnalyzer for Arc<T> {
    fn analyze_pair(&self, drug_a: DrugId, drug_b: DrugId) -> PairVerdict {
        (**self).analyze_pair(drug_a, drug_b)
    }
}

/// Local pair assessor backed by a drug lookup.
#[derive(Debug, Clone)]
pub struct PairAssessor<L> {
    lookup: L,
}

impl<L: DrugLookup> PairAssessor<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Assesses a pair, returning the structured result when both drugs were retrieved.
    ///
    /// # Errors
    ///
    /// Returns the degraded verdict if either lookup failed. Each drug is looked up exactly
    /// once; there is no retry.
    pub fn assessment(
        &self,
        drug_a: DrugId,
        drug_b: DrugId,
    ) -> Result<PairAssessment, PairVerdict> {
        let found_a = self.lookup.find_drug(drug_a);
        let found_b = self.lookup.find_drug(drug_b);

        match (found_a, found_b) {
            (Some(a), Some(b)) => Ok(PairAssessment::compute(a, b)),
            (a, b) => Err(PairVerdict::degraded(a.as_ref(), b.as_ref())),
        }
    }

    pub fn assess(&self, drug_a: DrugId, drug_b: DrugId) -> PairVerdict {
        match self.assessment(drug_a, drug_b) {
            Ok(assessment) => {
                tracing::debug!(
                    "assessed {} <-> {}: score={} risk={}",
                    drug_a,
                    drug_b,
                    assessment.score,
                    assessment.risk_level
                );
                assessment.into_verdict()
            }
            Err(degraded) => degraded,
        }
    }
}

impl<L: DrugLookup> PairAnalyzer for PairAssessor<L> {
    fn analyze_pair(&self, drug_a: DrugId, drug_b: DrugId) -> PairVerdict {
        self.assess(drug_a, drug_b)
    }
}
