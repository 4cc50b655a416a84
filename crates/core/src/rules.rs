//! Interaction rule engine.
//!
//! Three independent checks run in a fixed order over a drug pair: shared category,
//! side-effect overlap and combined dosage. A pair can trigger between zero and three rules.

use crate::constants::{
    CATEGORY_CONFLICT_SEVERITY, HIGH_DOSAGE_SEVERITY, MULTIPLE_OVERLAP_SEVERITY,
    SINGLE_OVERLAP_SEVERITY, VERY_HIGH_DOSAGE_SEVERITY,
};
use crate::drug::Drug;
use crate::scoring::DosageTier;
use crate::side_effects::overlapping;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    CategoryConflict,
    SideEffectOverlap,
    HighDosageCombination,
}

/// A triggered rule. Created per evaluation and owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRule {
    pub kind: ConflictKind,
    pub severity: u32,
    pub description: String,
}

impl InteractionRule {
    pub fn new(kind: ConflictKind, severity: u32, description: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            description: description.into(),
        }
    }
}

/// Evaluates every rule against a drug pair, in rule order.
///
/// Returns an empty list if either drug is absent.
pub fn evaluate(a: Option<&Drug>, b: Option<&Drug>) -> Vec<InteractionRule> {
    let (Some(a), Some(b)) = (a, b) else {
        return Vec::new();
    };

    let mut rules = Vec::with_capacity(3);

    if let Some(rule) = category_conflict(a, b) {
        rules.push(rule);
    }
    if let Some(rule) = side_effect_overlap(a, b) {
        rules.push(rule);
    }
    if let Some(rule) = high_dosage_combination(a, b) {
        rules.push(rule);
    }

    rules
}

fn category_conflict(a: &Drug, b: &Drug) -> Option<InteractionRule> {
    let (cat_a, cat_b) = (a.category.as_deref()?, b.category.as_deref()?);
    if cat_a.to_lowercase() != cat_b.to_lowercase() {
        return None;
    }

    Some(InteractionRule::new(
        ConflictKind::CategoryConflict,
        CATEGORY_CONFLICT_SEVERITY,
        format!("Both drugs are in same category: {cat_a}"),
    ))
}

fn side_effect_overlap(a: &Drug, b: &Drug) -> Option<InteractionRule> {
    match overlapping(a, b).len() {
        0 => None,
        1 => Some(InteractionRule::new(
            ConflictKind::SideEffectOverlap,
            SINGLE_OVERLAP_SEVERITY,
            "Single overlapping side effect",
        )),
        n => Some(InteractionRule::new(
            ConflictKind::SideEffectOverlap,
            MULTIPLE_OVERLAP_SEVERITY,
            format!("Multiple overlapping side effects: {n}"),
        )),
    }
}

fn high_dosage_combination(a: &Drug, b: &Drug) -> Option<InteractionRule> {
    match DosageTier::from_total(a.dosage_or_zero() + b.dosage_or_zero()) {
        DosageTier::VeryHigh => Some(InteractionRule::new(
            ConflictKind::HighDosageCombination,
            VERY_HIGH_DOSAGE_SEVERITY,
            "Combined dosage is greater than 1500 mg",
        )),
        DosageTier::High => Some(InteractionRule::new(
            ConflictKind::HighDosageCombination,
            HIGH_DOSAGE_SEVERITY,
            "Combined dosage is between 1000 and 1500 mg",
        )),
        DosageTier::Acceptable => None,
    }
}
