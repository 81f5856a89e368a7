//! Symptom and red-flag detection over normalized text.

use std::collections::BTreeSet;

use super::{knowledge::KnowledgeBase, normalize::normalize};

/// Detect canonical symptoms mentioned in `text`.
///
/// A symptom matches when any of its synonyms occurs as a plain substring of
/// the normalized text. There is no word-boundary check, so "photo" matches
/// the "hot" synonym of fever. The result is sorted and duplicate-free.
pub fn detect_symptoms(kb: &KnowledgeBase, text: &str) -> Vec<String> {
    let text = normalize(text);

    kb.synonyms
        .iter()
        .filter(|(_, phrases)| phrases.iter().any(|phrase| text.contains(phrase.as_str())))
        .map(|(symptom, _)| symptom.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Whether `text` contains any emergency phrasing.
pub fn has_red_flag(kb: &KnowledgeBase, text: &str) -> bool {
    kb.red_flags.is_match(&normalize(text))
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> std::sync::Arc<KnowledgeBase> {
        KnowledgeBase::builtin()
    }

    #[test]
    fn detects_sorted_symptoms() {
        assert_eq!(detect_symptoms(&kb(), "I have a sore throat and mild fever"), vec!["fever", "sore throat"]);
    }

    #[test]
    fn repeated_phrase_is_reported_once() {
        assert_eq!(detect_symptoms(&kb(), "headache headache"), vec!["headache"]);
    }

    #[test]
    fn several_synonyms_of_one_symptom_are_reported_once() {
        assert_eq!(detect_symptoms(&kb(), "Fever, chills, and I feel so HOT"), vec!["fever"]);
    }

    #[test]
    fn matching_is_naive_substring() {
        // "photo" contains "hot", "weakest" contains "weak".
        assert_eq!(detect_symptoms(&kb(), "I took a photo"), vec!["fever"]);
        assert_eq!(detect_symptoms(&kb(), "the weakest link"), vec!["fatigue"]);
    }

    #[test]
    fn matches_across_collapsed_whitespace() {
        assert_eq!(detect_symptoms(&kb(), "SORE\n\n   THROAT"), vec!["sore throat"]);
    }

    #[test]
    fn nothing_detected() {
        assert!(detect_symptoms(&kb(), "I feel great today").is_empty());
        assert!(detect_symptoms(&kb(), "").is_empty());
    }

    #[test]
    fn detection_is_deterministic() {
        let text = "dizzy, coughing, rash, vomit and stomach ache with a runny nose";
        let first = detect_symptoms(&kb(), text);
        let second = detect_symptoms(&kb(), text);

        assert_eq!(first, second);
        assert!(first.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(first.iter().all(|symptom| kb().is_canonical(symptom)));
    }

    #[test]
    fn red_flag_phrases() {
        let flagged = [
            "chest pain and trouble breathing",
            "Pressure in chest since this morning",
            "bluish lips after the walk",
            "she had a SEIZURE",
            "severe headache with a stiff neck",
            "vomiting blood",
            "black tarry stools",
            "severe abdominal pain",
            "very high fever",
        ];

        for text in flagged {
            assert!(has_red_flag(&kb(), text), "expected red flag for {text:?}");
        }
    }

    #[test]
    fn no_red_flag_for_routine_complaints() {
        let routine = ["I have a sore throat and mild fever", "headache", "I feel great today", "", "chest pains"];

        for text in routine {
            assert!(!has_red_flag(&kb(), text), "unexpected red flag for {text:?}");
        }
    }

    #[test]
    fn red_flag_temperature_is_lexical() {
        let flagged = ["temp >39.5c", "> 39.5 c", "fever of 40 C", "39.8°c", "it was 41.2 c", ">103f", "fever 104 F", "103.5 °f"];
        let routine = ["38.5 C", "101 F", "39 c", "39.4 c", "102.9 f", "1103 f", "140c", "39.5 cough"];

        for text in flagged {
            assert!(has_red_flag(&kb(), text), "expected red flag for {text:?}");
        }

        for text in routine {
            assert!(!has_red_flag(&kb(), text), "unexpected red flag for {text:?}");
        }
    }

    #[test]
    fn red_flag_survives_appended_text() {
        let flagged = ["chest pain", "fainting", "temp 40c", "trouble breathing"];
        let suffixes = ["", "and also a cough", "I feel great today", "123 !!! ???", "stiff"];

        for text in flagged {
            for suffix in suffixes {
                let extended = format!("{text} {suffix}");
                assert!(has_red_flag(&kb(), &extended), "lost red flag for {extended:?}");
            }
        }
    }
}
