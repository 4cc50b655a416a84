//! # rx Core
//!
//! Core decision logic for drug interaction assessment.
//!
//! This crate contains the pure assessment pipeline and its collaborator contracts:
//! - Rule evaluation, side-effect overlap, severity scoring and risk classification
//! - Pair assessment with degradation when a drug cannot be retrieved
//! - Prescription summaries over every unordered drug pair
//! - Drug store access (seeded in-memory catalog or HTTP) and remote pair analysis
//!
//! **No API concerns**: authentication, HTTP/gRPC servers and wire types belong in `api-grpc`,
//! `api-rest` or `api-shared`.

pub mod aggregator;
pub mod assessor;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod drug;
pub mod error;
pub mod lookup;
pub mod remote;
pub mod report;
pub mod rules;
pub mod scoring;
pub mod side_effects;

pub use aggregator::PrescriptionAggregator;
pub use assessor::{PairAnalyzer, PairAssessment, PairAssessor, PairVerdict};
pub use catalog::DrugCatalog;
pub use config::CoreConfig;
pub use drug::{Drug, DrugId, PrescriptionItem};
pub use error::{CoreError, CoreResult, LookupError};
pub use lookup::DrugLookup;
pub use rules::{ConflictKind, InteractionRule};
pub use scoring::RiskLevel;

use remote::{HttpDrugLookup, HttpPairAnalyzer};
use std::sync::Arc;

/// Interaction assessment operations exposed to the API layers.
///
/// Cheap to clone; all collaborators are shared behind `Arc`s and hold no mutable state.
#[derive(Clone)]
pub struct InteractionService {
    assessor: Arc<PairAssessor<Arc<dyn DrugLookup>>>,
    aggregator: PrescriptionAggregator,
}

impl InteractionService {
    /// Wires a service from explicit collaborators.
    ///
    /// Prescriptions are analysed with `analyzer` when given, otherwise with the local assessor.
    pub fn new(lookup: Arc<dyn DrugLookup>, analyzer: Option<Arc<dyn PairAnalyzer>>) -> Self {
        let assessor = Arc::new(PairAssessor::new(lookup.clone()));
        let analyzer: Arc<dyn PairAnalyzer> = match analyzer {
            Some(remote) => remote,
            None => assessor.clone(),
        };

        Self {
            aggregator: PrescriptionAggregator::new(lookup, analyzer),
            assessor,
        }
    }

    /// Local service over the seeded in-memory catalog.
    pub fn with_seeded_catalog() -> Self {
        Self::new(Arc::new(DrugCatalog::seeded()), None)
    }

    /// Wires a service according to `cfg`.
    ///
    /// Builds blocking HTTP clients when remote collaborators are configured, so this must not
    /// be called from within an async task.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::HttpClient`] if an HTTP client cannot be built.
    pub fn from_config(cfg: &CoreConfig) -> CoreResult<Self> {
        let lookup: Arc<dyn DrugLookup> = match cfg.drug_service_url() {
            Some(url) => {
                tracing::info!("using drug store at {}", url);
                Arc::new(HttpDrugLookup::new(url, cfg.lookup_timeout())?)
            }
            None => {
                tracing::info!("using seeded in-memory drug catalog");
                Arc::new(DrugCatalog::seeded())
            }
        };

        let analyzer: Option<Arc<dyn PairAnalyzer>> = match cfg.interaction_service_url() {
            Some(url) => {
                tracing::info!("using remote interaction service at {}", url);
                Some(Arc::new(HttpPairAnalyzer::new(url, cfg.lookup_timeout())?))
            }
            None => None,
        };

        Ok(Self::new(lookup, analyzer))
    }

    /// Risk verdict for a drug pair. Never fails.
    pub fn assess_pair(&self, drug_a: DrugId, drug_b: DrugId) -> PairVerdict {
        self.assessor.assess(drug_a, drug_b)
    }

    /// Interaction summary over every unordered pair of `items`. Never fails.
    pub fn summarize_prescription(&self, items: &[PrescriptionItem]) -> String {
        self.aggregator.summarize(items)
    }
}
