//! Self-care tip aggregation.

use std::collections::HashSet;

use super::knowledge::KnowledgeBase;

/// Default maximum number of tips returned by [`build_tips`].
pub const DEFAULT_MAX_TIPS: usize = 10;

/// Collect tips for `symptoms`, followed by the generic tips.
///
/// Symptoms without a remedy entry contribute nothing. Duplicates are dropped
/// keeping the first occurrence, and the result is cut to `max_tips` entries.
pub fn build_tips<S: AsRef<str>>(kb: &KnowledgeBase, symptoms: &[S], max_tips: usize) -> Vec<String> {
    let specific = symptoms.iter().filter_map(|symptom| kb.remedies.get(symptom.as_ref())).flatten();

    let mut seen = HashSet::new();

    specific
        .chain(kb.generic_tips.iter())
        .filter(|tip| seen.insert(tip.as_str()))
        .take(max_tips)
        .cloned()
        .collect()
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::knowledge::{GENERIC_TIPS, RedFlagPatternSet};

    fn custom_kb() -> KnowledgeBase {
        let tips = |prefix: &str, count: usize| (0..count).map(|i| format!("{prefix} tip {i}")).collect::<Vec<_>>();

        KnowledgeBase {
            synonyms: [("alpha".to_string(), vec!["alpha".to_string()]), ("beta".to_string(), vec!["beta".to_string()])].into(),
            remedies: [
                ("alpha".to_string(), tips("alpha", 8)),
                ("beta".to_string(), vec!["shared tip".to_string(), "beta tip".to_string(), "shared tip".to_string()]),
            ]
            .into(),
            red_flags: RedFlagPatternSet::new(Vec::<String>::new()).unwrap(),
            generic_tips: vec!["shared tip".to_string(), "generic one".to_string(), "generic two".to_string()],
        }
    }

    #[test]
    fn empty_symptoms_yield_generic_block() {
        let kb = KnowledgeBase::builtin();
        let symptoms: [&str; 0] = [];

        assert_eq!(build_tips(&kb, &symptoms, DEFAULT_MAX_TIPS), GENERIC_TIPS);
    }

    #[test]
    fn symptom_tips_come_first_in_order() {
        let kb = KnowledgeBase::builtin();
        let tips = build_tips(&kb, &["fever", "sore throat"], DEFAULT_MAX_TIPS);

        assert_eq!(tips.len(), 8);
        assert_eq!(tips[..3], kb.remedies["fever"][..]);
        assert_eq!(tips[3..5], kb.remedies["sore throat"][..]);
        assert_eq!(tips[5..], GENERIC_TIPS[..]);
    }

    #[test]
    fn symptoms_without_remedies_contribute_nothing() {
        let kb = KnowledgeBase::builtin();

        assert_eq!(build_tips(&kb, &["rash", "chest pain", "not a symptom"], DEFAULT_MAX_TIPS), GENERIC_TIPS);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let kb = custom_kb();
        let tips = build_tips(&kb, &["beta"], DEFAULT_MAX_TIPS);

        assert_eq!(tips, vec!["shared tip", "beta tip", "generic one", "generic two"]);
    }

    #[test]
    fn output_is_capped() {
        let kb = custom_kb();
        let tips = build_tips(&kb, &["alpha", "beta"], DEFAULT_MAX_TIPS);

        assert_eq!(tips.len(), DEFAULT_MAX_TIPS);
        assert_eq!(tips[0], "alpha tip 0");
        assert_eq!(tips[7], "alpha tip 7");
        assert_eq!(tips[8], "shared tip");
        assert_eq!(tips[9], "beta tip");
    }

    #[test]
    fn builtin_tables_never_exceed_cap() {
        let kb = KnowledgeBase::builtin();
        let every_symptom = kb.synonyms.keys().cloned().collect::<Vec<_>>();

        assert_eq!(build_tips(&kb, &every_symptom, DEFAULT_MAX_TIPS).len(), DEFAULT_MAX_TIPS);
        assert_eq!(build_tips(&kb, &every_symptom, 3).len(), 3);
    }
}
