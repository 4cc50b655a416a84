//! Drug and prescription value records.
//!
//! These are read-only snapshots handed to the core by the drug store and by callers. The
//! serde layout follows the drug store's JSON (`dosageMg`, `sideEffects`, `drugId`, `doseMg`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque drug identifier as issued by the drug store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrugId(pub i64);

impl fmt::Display for DrugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DrugId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drug {
    pub id: DrugId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub dosage_mg: Option<u32>,
    #[serde(default)]
    pub side_effects: Option<Vec<String>>,
}

impl Drug {
    /// Creates a drug with every optional field populated.
    pub fn new(
        id: impl Into<DrugId>,
        name: impl Into<String>,
        category: impl Into<String>,
        dosage_mg: u32,
        side_effects: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: Some(category.into()),
            dosage_mg: Some(dosage_mg),
            side_effects: Some(side_effects.iter().map(|s| s.to_string()).collect()),
        }
    }

    /// Dosage in mg, with an unknown dosage counting as zero.
    pub fn dosage_or_zero(&self) -> u64 {
        u64::from(self.dosage_mg.unwrap_or(0))
    }
}

/// One line of a prescription as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionItem {
    pub drug_id: DrugId,
    #[serde(default)]
    pub dose_mg: Option<u32>,
}

impl PrescriptionItem {
    pub fn new(drug_id: impl Into<DrugId>, dose_mg: Option<u32>) -> Self {
        Self {
            drug_id: drug_id.into(),
            dose_mg,
        }
    }
}
