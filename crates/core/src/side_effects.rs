//! Side-effect overlap between two drugs.
//!
//! [`overlapping`] is the single overlap computation shared by the rule engine and by
//! [`describe`], so the severity and the text can never disagree.

use crate::drug::Drug;

/// Side effects of `a` that also appear in `b`, in `a`'s order.
///
/// Duplicates in `a` are kept, one entry per occurrence. Matching is exact. An absent list on
/// either side yields no overlap.
pub fn overlapping<'a>(a: &'a Drug, b: &Drug) -> Vec<&'a str> {
    match (&a.side_effects, &b.side_effects) {
        (Some(effects_a), Some(effects_b)) => effects_a
            .iter()
            .filter(|effect| effects_b.contains(effect))
            .map(String::as_str)
            .collect(),
        _ => Vec::new(),
    }
}

/// Natural-language description of the side-effect overlap between two drugs.
pub fn describe(a: Option<&Drug>, b: Option<&Drug>) -> String {
    let (Some(a), Some(b)) = (a, b) else {
        return "One or both drugs not found.".into();
    };

    if a.side_effects.is_none() || b.side_effects.is_none() {
        return "No side-effect data available for one or both drugs.".into();
    }

    match overlapping(a, b).as_slice() {
        [] => "No overlapping side effects detected.".into(),
        [single] => format!("Single overlapping side effect: {single}"),
        many => format!(
            "Multiple overlapping side effects ({}): {}",
            many.len(),
            many.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drug(effects: Option<&[&str]>) -> Drug {
        Drug {
            side_effects: effects.map(|e| e.iter().map(|s| s.to_string()).collect()),
            ..Drug::new(1, "Test", "Test", 0, &[])
        }
    }

    #[test]
    fn describe_reports_missing_drug_first() {
        let a = drug(None);

        assert_eq!(describe(Some(&a), None), "One or both drugs not found.");
        assert_eq!(describe(None, None), "One or both drugs not found.");
    }

    #[test]
    fn describe_reports_missing_side_effect_data() {
        let a = drug(Some(&["Nausea"]));
        let b = drug(None);

        assert_eq!(
            describe(Some(&a), Some(&b)),
            "No side-effect data available for one or both drugs."
        );
        assert!(overlapping(&a, &b).is_empty());
    }

    #[test]
    fn describe_covers_zero_one_and_many() {
        let a = drug(Some(&["Nausea", "Headache", "Rash"]));

        let none = drug(Some(&["Dizziness"]));
        assert_eq!(
            describe(Some(&a), Some(&none)),
            "No overlapping side effects detected."
        );

        let one = drug(Some(&["Rash", "Dizziness"]));
        assert_eq!(
            describe(Some(&a), Some(&one)),
            "Single overlapping side effect: Rash"
        );

        let many = drug(Some(&["Rash", "Nausea"]));
        assert_eq!(
            describe(Some(&a), Some(&many)),
            "Multiple overlapping side effects (2): Nausea, Rash"
        );
    }

    #[test]
    fn duplicates_in_first_list_count_per_occurrence() {
        let a = drug(Some(&["Nausea", "Nausea"]));
        let b = drug(Some(&["Nausea"]));

        assert_eq!(overlapping(&a, &b), vec!["Nausea", "Nausea"]);
        assert_eq!(
            describe(Some(&a), Some(&b)),
            "Multiple overlapping side effects (2): Nausea, Nausea"
        );
        // Direction matters: B's single entry matches once.
        assert_eq!(overlapping(&b, &a), vec!["Nausea"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let a = drug(Some(&["nausea"]));
        let b = drug(Some(&["Nausea"]));

        assert!(overlapping(&a, &b).is_empty());
    }
}
