//! In-memory drug catalog.
//!
//! Stands in for the external drug store when no `DRUG_SERVICE_URL` is configured. It is
//! seeded once at construction and never mutated afterwards.

use crate::drug::{Drug, DrugId};
use crate::error::LookupError;
use crate::lookup::{DrugLookup, LookupResult};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct DrugCatalog {
    drugs: BTreeMap<DrugId, Drug>,
}

impl DrugCatalog {
    /// Builds a catalog from the given drugs. Later entries replace earlier ones with the same id.
    pub fn new(drugs: impl IntoIterator<Item = Drug>) -> Self {
        Self {
            drugs: drugs.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    /// The ten reference drugs the drug store is seeded with, ids 1 to 10.
    pub fn seeded() -> Self {
        Self::new([
            Drug::new(1, "Paracetamol", "Analgesic", 500, &["Nausea", "Rash"]),
            Drug::new(2, "Ibuprofen", "NSAID", 400, &["Stomach pain", "Headache"]),
            Drug::new(3, "Amoxicillin", "Antibiotic", 250, &["Diarrhea", "Allergic reaction"]),
            Drug::new(4, "Cetirizine", "Antihistamine", 10, &["Drowsiness", "Dry mouth"]),
            Drug::new(5, "Metformin", "Anti-diabetic", 500, &["Vomiting", "Weakness"]),
            Drug::new(6, "Atorvastatin", "Cholesterol", 20, &["Muscle pain", "Liver issues"]),
            Drug::new(7, "Azithromycin", "Antibiotic", 500, &["Nausea", "Stomach upset"]),
            Drug::new(8, "Aspirin", "Painkiller", 300, &["Bleeding", "Upset stomach"]),
            Drug::new(9, "Ciprofloxacin", "Antibiotic", 500, &["Dizziness", "Joint pain"]),
            Drug::new(10, "Omeprazole", "Antacid", 20, &["Constipation", "Gas"]),
        ])
    }

    /// All drugs ordered by id.
    pub fn drugs(&self) -> impl Iterator<Item = &Drug> {
        self.drugs.values()
    }

    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }
}

impl DrugLookup for DrugCatalog {
    fn lookup_drug(&self, id: DrugId) -> LookupResult {
        self.drugs.get(&id).cloned().ok_or(LookupError::NotFound(id))
    }
}
