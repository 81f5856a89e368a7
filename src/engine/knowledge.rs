//! Static triage tables: symptom synonyms, remedies, and red-flag patterns.
//!
//! The builtin tables are constructed once per process and shared through an
//! `Arc`; nothing mutates them after construction.

use std::{
    collections::BTreeMap,
    sync::{Arc, LazyLock},
};

use anyhow::Context;
use regex::{Regex, RegexBuilder};

use crate::base::types::Res;

// Types.

/// Canonical symptom name to the surface phrases that indicate it.
pub type SymptomSynonymTable = BTreeMap<String, Vec<String>>;

/// Canonical symptom name to its ordered self-care tips.
pub type RemedyTable = BTreeMap<String, Vec<String>>;

// Builtin data.

const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    ("fever", &["fever", "temperature", "hot", "chills"]),
    ("cough", &["cough", "coughing"]),
    ("sore throat", &["sore throat", "throat pain", "scratchy throat", "tonsil"]),
    ("runny nose", &["runny nose", "stuffy nose", "congestion", "blocked nose", "sneezing"]),
    ("headache", &["headache", "migraine", "head pain"]),
    ("fatigue", &["tired", "fatigue", "exhausted", "weak"]),
    ("body aches", &["body ache", "muscle pain", "aches", "soreness"]),
    ("nausea", &["nausea", "queasy", "nauseous"]),
    ("vomiting", &["vomit", "vomiting", "throwing up"]),
    ("diarrhea", &["diarrhea", "loose stools"]),
    ("stomach pain", &["stomach ache", "stomach pain", "abdominal pain", "cramps"]),
    ("shortness of breath", &["shortness of breath", "trouble breathing", "breathless", "wheezing"]),
    ("chest pain", &["chest pain", "pressure in chest", "tightness chest"]),
    ("dizziness", &["dizzy", "lightheaded"]),
    ("rash", &["rash", "hives", "skin rash"]),
    ("ear pain", &["earache", "ear pain"]),
    ("eye irritation", &["red eye", "itchy eye", "watery eye"]),
];

const BUILTIN_REMEDIES: &[(&str, &[&str])] = &[
    (
        "fever",
        &[
            "Rest and drink plenty of fluids.",
            "Use a cool compress on the forehead.",
            "Over-the-counter fever reducers may help (check label & safety).",
        ],
    ),
    ("cough", &["Sip warm fluids (herbal tea with honey if not for infants).", "Try steam inhalation or a humidifier."]),
    ("sore throat", &["Gargle warm salt water.", "Drink warm liquids (honey + lemon, not for infants)."]),
    ("runny nose", &["Use saline sprays.", "Stay hydrated and rest."]),
    ("headache", &["Rest in a quiet, dark room.", "Stay hydrated."]),
    ("fatigue", &["Prioritize rest.", "Stay hydrated and eat balanced meals."]),
    ("nausea", &["Small sips of clear fluids.", "Eat bland foods like bananas, rice, toast."]),
    ("vomiting", &["Rehydrate slowly with small sips of fluids.", "Seek help if you can't keep fluids down."]),
    ("diarrhea", &["Drink oral rehydration solutions.", "Eat simple, low-fat foods."]),
    ("stomach pain", &["Apply a warm compress to abdomen.", "Eat bland foods and avoid irritants."]),
];

/// Tips appended after the symptom-specific ones, whatever was detected.
pub const GENERIC_TIPS: &[&str] = &[
    "Rest as needed and keep well hydrated.",
    "If you use over-the-counter medicines, read the label and follow local guidance.",
    "If symptoms persist, worsen, or you are concerned, seek medical care.",
];

/// Emergency phrasings, one concept per pattern.
///
/// The fever pattern is lexical: it recognizes written temperatures of
/// 39.5-42.x C or 103-112.x F and the `>39.5c` / `>103f` shorthand, but never
/// parses a number.
const BUILTIN_RED_FLAGS: &[&str] = &[
    r"\b(?:chest pain|pressure in chest|tightness chest)\b",
    r"\b(?:shortness of breath|trouble breathing|breathless|bluish lips)\b",
    r"\b(?:confusion|fainting|unresponsive|seizure)\b",
    r"\b(?:severe headache|stiff neck)\b",
    r"\b(?:continuous vomiting|vomiting blood)\b",
    r"\b(?:blood in stool|black tarry stools)\b",
    r"\bsevere abdominal pain\b",
    r"(?:\bvery high fever\b|>\s?39(?:\.5)?\s?°?\s?c\b|>\s?103\s?°?\s?f\b|(?:^|[^\d.])(?:39\.[5-9]\d*|4[0-2](?:\.\d+)?)\s?°?\s?c\b|(?:^|[^\d.])1(?:0[3-9]|1[0-2])(?:\.\d+)?\s?°?\s?f\b)",
];

static BUILTIN: LazyLock<Arc<KnowledgeBase>> = LazyLock::new(|| {
    let red_flags = RedFlagPatternSet::new(BUILTIN_RED_FLAGS).expect("Invalid builtin red-flag pattern");

    Arc::new(KnowledgeBase {
        synonyms: table(BUILTIN_SYNONYMS),
        remedies: table(BUILTIN_REMEDIES),
        red_flags,
        generic_tips: GENERIC_TIPS.iter().map(|tip| tip.to_string()).collect(),
    })
});

fn table(rows: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    rows.iter()
        .map(|(key, values)| (key.to_string(), values.iter().map(|value| value.to_string()).collect()))
        .collect()
}

// Structs.

/// Compiled emergency patterns, searched case-insensitively.
#[derive(Debug, Clone)]
pub struct RedFlagPatternSet {
    patterns: Vec<Regex>,
}

impl RedFlagPatternSet {
    /// Compile the given patterns in order.
    pub fn new<I, S>(patterns: I) -> Res<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .with_context(|| format!("Invalid red-flag pattern: {pattern}"))
            })
            .collect::<Res<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns `true` as soon as any pattern is found in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(text))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// The full set of tables the engine reads from.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub synonyms: SymptomSynonymTable,
    pub remedies: RemedyTable,
    pub red_flags: RedFlagPatternSet,
    pub generic_tips: Vec<String>,
}

impl KnowledgeBase {
    /// The builtin tables, shared by every caller.
    pub fn builtin() -> Arc<Self> {
        BUILTIN.clone()
    }

    /// Whether `symptom` is a canonical name in the synonym table.
    pub fn is_canonical(&self, symptom: &str) -> bool {
        self.synonyms.contains_key(symptom)
    }
}

// Tests.
