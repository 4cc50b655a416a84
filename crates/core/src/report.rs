//! Text rendering of assessments and prescription summaries.
//!
//! All formatting lives here; the assessor and aggregator only produce structured results.

use crate::assessor::{PairAssessment, PairVerdict};
use crate::drug::Drug;
use crate::scoring::DosageTier;

const OK_MARK: &str = "✓";
const WARN_MARK: &str = "⚠️";

/// Renders the explanatory message of a verdict.
pub fn render_message(assessment: &PairAssessment) -> String {
    let mut out = String::from("Analysis Summary:\n");

    out.push_str(&drug_line("Drug A", &assessment.drug_a));
    out.push_str(&drug_line("Drug B", &assessment.drug_b));
    out.push('\n');

    let tier = assessment.dosage_tier();
    out.push_str(&format!(
        "Combined Dosage: {}mg ({} {})\n\n",
        assessment.combined_dosage_mg(),
        tier_mark(tier),
        tier.label()
    ));

    out.push_str(&format!(
        "Side Effects: {}\n\n",
        assessment.side_effect_summary()
    ));

    if assessment.rules.is_empty() {
        for line in [
            "No significant interaction risks detected.",
            "Category check: Passed (different categories)",
            "Dosage check: Passed (within safe limits)",
            "Side effects: No significant overlap",
        ] {
            out.push_str(&format!("{OK_MARK} {line}\n"));
        }
        out.push_str("\nOverall Assessment: These drugs can be safely used together.");
    } else {
        out.push_str(&format!("{WARN_MARK} Interaction Risks Detected:\n"));
        for rule in &assessment.rules {
            out.push_str(&format!("• {}\n", rule.description));
        }
        out.push_str(
            "\nRecommendation: Consult with a healthcare professional before combining these medications.",
        );
    }

    out
}

fn tier_mark(tier: DosageTier) -> &'static str {
    match tier {
        DosageTier::Acceptable => OK_MARK,
        DosageTier::High | DosageTier::VeryHigh => WARN_MARK,
    }
}

fn drug_line(label: &str, drug: &Drug) -> String {
    let mut line = format!("• {label}: {}", drug.name);
    if let Some(category) = &drug.category {
        line.push_str(&format!(" ({category})"));
    }
    if let Some(dosage) = drug.dosage_mg {
        line.push_str(&format!(" - {dosage}mg"));
    }
    line.push('\n');
    line
}

/// Renders one line of a prescription summary.
pub fn render_pair_line(name_a: &str, name_b: &str, verdict: &PairVerdict) -> String {
    format!(
        "{name_a} <-> {name_b} => risk={} score={} message={}",
        verdict.risk_level, verdict.severity_score, verdict.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lists_triggered_rules_and_recommendation() {
        let assessment = PairAssessment::compute(
            Drug::new(1, "Ibuprofen", "NSAID", 400, &["Nausea", "Headache"]),
            Drug::new(2, "Naproxen", "NSAID", 300, &["Nausea", "Rash"]),
        );

        let message = render_message(&assessment);

        assert!(message.starts_with("Analysis Summary:\n• Drug A: Ibuprofen (NSAID) - 400mg\n"));
        assert!(message.contains("• Drug B: Naproxen (NSAID) - 300mg\n"));
        assert!(message.contains("Combined Dosage: 700mg (✓ Acceptable)"));
        assert!(message.contains("Side Effects: Single overlapping side effect: Nausea"));
        assert!(message.contains("⚠️ Interaction Risks Detected:\n• Both drugs are in same category: NSAID\n• Single overlapping side effect\n"));
        assert!(message.ends_with("before combining these medications."));
    }

    #[test]
    fn message_for_clean_pair_states_no_risk() {
        let assessment = PairAssessment::compute(
            Drug::new(4, "Cetirizine", "Antihistamine", 10, &["Drowsiness"]),
            Drug::new(10, "Omeprazole", "Antacid", 20, &["Gas"]),
        );

        let message = render_message(&assessment);

        assert_eq!(
            message,
            "Analysis Summary:\n\
             • Drug A: Cetirizine (Antihistamine) - 10mg\n\
             • Drug B: Omeprazole (Antacid) - 20mg\n\
             \n\
             Combined Dosage: 30mg (✓ Acceptable)\n\
             \n\
             Side Effects: No overlapping side effects detected.\n\
             \n\
             ✓ No significant interaction risks detected.\n\
             ✓ Category check: Passed (different categories)\n\
             ✓ Dosage check: Passed (within safe limits)\n\
             ✓ Side effects: No significant overlap\n\
             \n\
             Overall Assessment: These drugs can be safely used together."
        );
        assert!(!message.contains("Interaction Risks Detected"));
    }

    #[test]
    fn message_omits_unknown_category_and_dosage_and_tags_dosage() {
        let mut a = Drug::new(1, "Mystery", "Unknown", 0, &[]);
        a.category = None;
        a.dosage_mg = None;
        let b = Drug::new(2, "Heavy", "Bulk", 1600, &[]);

        let message = render_message(&PairAssessment::compute(a, b));

        assert!(message.contains("• Drug A: Mystery\n"));
        assert!(message.contains("Combined Dosage: 1600mg (⚠️ Very High)"));
        assert!(message.contains("• Combined dosage is greater than 1500 mg\n"));
    }

    #[test]
    fn high_dosage_tag() {
        let message = render_message(&PairAssessment::compute(
            Drug::new(1, "A", "X", 600, &[]),
            Drug::new(2, "B", "Y", 500, &[]),
        ));

        assert!(message.contains("Combined Dosage: 1100mg (⚠️ High)"));
    }

    #[test]
    fn pair_line_format() {
        let verdict = PairVerdict::degraded(None, None);

        assert_eq!(
            render_pair_line("Aspirin", "UNKNOWN", &verdict),
            format!(
                "Aspirin <-> UNKNOWN => risk=MODERATE score=10 message={}",
                verdict.message
            )
        );
    }
}
