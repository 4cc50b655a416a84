//! Prescription-level interaction summary.
//!
//! Every unordered pair of prescription items is analysed independently and rendered as one
//! line, in `i < j` input order. A degraded verdict for one pair never stops the others.

use crate::assessor::PairAnalyzer;
use crate::constants::NO_INTERACTIONS_SUMMARY;
use crate::drug::{DrugId, PrescriptionItem};
use crate::lookup::DrugLookup;
use crate::report::render_pair_line;
use std::sync::Arc;

/// Index pairs `(i, j)` with `i < j < n`, in enumeration order.
pub fn pair_indices(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

#[derive(Clone)]
pub struct PrescriptionAggregator {
    lookup: Arc<dyn DrugLookup>,
    analyzer: Arc<dyn PairAnalyzer>,
}

impl PrescriptionAggregator {
    /// `lookup` resolves display names; `analyzer` produces each pair's verdict.
    pub fn new(lookup: Arc<dyn DrugLookup>, analyzer: Arc<dyn PairAnalyzer>) -> Self {
        Self { lookup, analyzer }
    }

    /// Builds the newline-separated interaction summary for a prescription.
    ///
    /// Returns the fixed sentinel when there are fewer than two items. Repeated drug ids are
    /// compared against each other like any other pair.
    pub fn summarize(&self, items: &[PrescriptionItem]) -> String {
        if items.len() < 2 {
            return NO_INTERACTIONS_SUMMARY.to_string();
        }

        tracing::debug!(
            "summarizing {} items ({} pairs)",
            items.len(),
            items.len() * (items.len() - 1) / 2
        );

        pair_indices(items.len())
            .map(|(i, j)| {
                let (a, b) = (items[i].drug_id, items[j].drug_id);
                let verdict = self.analyzer.analyze_pair(a, b);
                render_pair_line(&self.display_name(a), &self.display_name(b), &verdict)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drug name, or the decimal id when the drug cannot be retrieved.
    fn display_name(&self, id: DrugId) -> String {
        self.lookup
            .find_drug(id)
            .map(|d| d.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| id.to_string())
    }
}
