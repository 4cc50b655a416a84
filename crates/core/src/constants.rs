//! Constants used throughout the rx core crate.
//!
//! Rule severities and thresholds live here so the rule engine, the renderer and the tests all
//! agree on the same numbers.

/// Severity contributed when both drugs share a category.
pub const CATEGORY_CONFLICT_SEVERITY: u32 = 70;

/// Severity contributed by exactly one shared side effect.
pub const SINGLE_OVERLAP_SEVERITY: u32 = 15;

/// Severity contributed by two or more shared side effects.
pub const MULTIPLE_OVERLAP_SEVERITY: u32 = 40;

/// Severity contributed when the combined dosage is above [`HIGH_DOSAGE_THRESHOLD_MG`].
pub const HIGH_DOSAGE_SEVERITY: u32 = 45;

/// Severity contributed when the combined dosage is above [`VERY_HIGH_DOSAGE_THRESHOLD_MG`].
pub const VERY_HIGH_DOSAGE_SEVERITY: u32 = 90;

/// Combined dosage (mg) strictly above which the high tier applies.
pub const HIGH_DOSAGE_THRESHOLD_MG: u64 = 1000;

/// Combined dosage (mg) strictly above which the very-high tier applies.
pub const VERY_HIGH_DOSAGE_THRESHOLD_MG: u64 = 1500;

/// Exclusive upper bound of the SAFE tier.
pub const SAFE_SCORE_LIMIT: u32 = 30;

/// Exclusive upper bound of the MODERATE tier.
pub const MODERATE_SCORE_LIMIT: u32 = 60;

/// Exclusive upper bound of the HIGH tier.
pub const HIGH_SCORE_LIMIT: u32 = 90;

/// Label used for a drug that could not be retrieved.
pub const UNKNOWN_DRUG_LABEL: &str = "UNKNOWN";

/// Fixed score of a degraded verdict.
pub const DEGRADED_SEVERITY_SCORE: u32 = 10;

/// Message of a degraded verdict produced by the local assessor.
pub const DRUGS_UNAVAILABLE_MESSAGE: &str =
    "One or both drugs could not be fetched from the drug database.";

/// Message of the verdict returned when the remote interaction service cannot be reached.
pub const INTERACTION_SERVICE_UNAVAILABLE_MESSAGE: &str =
    "Interaction service unavailable (fallback).";

/// Summary returned for prescriptions with fewer than two items.
pub const NO_INTERACTIONS_SUMMARY: &str = "no interactions (fewer than two drugs)";

/// Default per-request timeout for the HTTP collaborators, in seconds.
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;
