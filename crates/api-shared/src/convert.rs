//! Conversions between wire types and core types.

use crate::pb;

impl From<rx_core::PairVerdict> for pb::PairVerdict {
    fn from(v: rx_core::PairVerdict) -> Self {
        Self {
            drug_a: v.drug_a,
            drug_b: v.drug_b,
            risk_level: v.risk_level.to_string(),
            severity_score: v.severity_score,
            message: v.message,
        }
    }
}

impl From<pb::PrescriptionItem> for rx_core::PrescriptionItem {
    fn from(item: pb::PrescriptionItem) -> Self {
        rx_core::PrescriptionItem::new(item.drug_id, item.dose_mg)
    }
}

/// Converts a prescription request into core items, preserving order.
pub fn prescription_items(req: pb::SummarizePrescriptionReq) -> Vec<rx_core::PrescriptionItem> {
    req.items.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rx_core::{DrugId, PairVerdict, RiskLevel};

    #[test]
    fn verdict_risk_level_is_upper_case_name() {
        let verdict = PairVerdict {
            drug_a: "Aspirin".into(),
            drug_b: "Ibuprofen".into(),
            risk_level: RiskLevel::Critical,
            severity_score: 130,
            message: "m".into(),
        };

        let wire = pb::PairVerdict::from(verdict);

        assert_eq!(wire.risk_level, "CRITICAL");
        assert_eq!(wire.severity_score, 130);
    }

    #[test]
    fn request_json_uses_camel_case() {
        let req: pb::SummarizePrescriptionReq = serde_json::from_str(
            r#"{"items":[{"drugId":8,"doseMg":300},{"drugId":2}]}"#,
        )
        .expect("valid request json");

        let items = prescription_items(req);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].drug_id, DrugId(8));
        assert_eq!(items[0].dose_mg, Some(300));
        assert_eq!(items[1].dose_mg, None);
    }

    #[test]
    fn missing_items_default_to_empty() {
        let req: pb::SummarizePrescriptionReq = serde_json::from_str("{}").unwrap();

        assert!(prescription_items(req).is_empty());
    }
}
