//! Drug store access.
//!
//! The drug store is an external collaborator. The core only needs a single read-only,
//! idempotent operation: fetch one drug by id. A failed fetch is reported as a
//! [`LookupError`] and checked explicitly at the call site.

use crate::drug::{Drug, DrugId};
use crate::error::LookupError;
use std::sync::Arc;

pub type LookupResult = std::result::Result<Drug, LookupError>;

/// Read-only access to drug metadata.
pub trait DrugLookup: Send + Sync {
    /// Fetch a single drug.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if the store has no such drug and
    /// [`LookupError::Unreachable`] if the store could not be asked (including timeouts).
    fn lookup_drug(&self, id: DrugId) -> LookupResult;

    /// Fetch a drug, logging and discarding any failure.
    fn find_drug(&self, id: DrugId) -> Option<Drug> {
        match self.lookup_drug(id) {
            Ok(drug) => Some(drug),
            Err(e) => {
                tracing::warn!("drug lookup failed for {}: {}", id, e);
                None
            }
        }
    }
}

impl<T: DrugLookup + ?Sized> DrugLookup for Arc<T> {
    fn lookup_drug(&self, id: DrugId) -> LookupResult {
        (**self).lookup_drug(id)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::HashMap;

    /// Lookup stub with scripted failures.
    #[derive(Default)]
    pub(crate) struct StubLookup {
        drugs: HashMap<DrugId, Drug>,
        unreachable: Vec<DrugId>,
    }

    impl StubLookup {
        pub(crate) fn with(mut self, drug: Drug) -> Self {
            self.drugs.insert(drug.id, drug);
            self
        }

        pub(crate) fn unreachable(mut self, id: i64) -> Self {
            self.unreachable.push(DrugId(id));
            self
        }
    }

    impl DrugLookup for StubLookup {
        fn lookup_drug(&self, id: DrugId) -> LookupResult {
            if self.unreachable.contains(&id) {
                return Err(LookupError::Unreachable("connection refused".into()));
            }
            self.drugs.get(&id).cloned().ok_or(LookupError::NotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::StubLookup;
    use super::*;

    #[test]
    fn find_drug_swallows_lookup_errors() {
        let lookup = StubLookup::default()
            .with(Drug::new(1, "Paracetamol", "Analgesic", 500, &["Nausea"]))
            .unreachable(2);

        assert_eq!(lookup.find_drug(DrugId(1)).map(|d| d.name), Some("Paracetamol".into()));
        assert!(lookup.find_drug(DrugId(2)).is_none());
        assert!(lookup.find_drug(DrugId(3)).is_none());
    }

    #[test]
    fn shared_lookup_delegates() {
        let lookup: Arc<dyn DrugLookup> = Arc::new(StubLookup::default());

        assert_eq!(
            lookup.lookup_drug(DrugId(9)),
            Err(LookupError::NotFound(DrugId(9)))
        );
    }
}
