//! The symptom triage engine.
//!
//! Everything in this module is pure and synchronous:
//! - [`normalize`] folds whitespace and case.
//! - [`detect_symptoms`] maps text to canonical symptoms by naive substring search.
//! - [`has_red_flag`] searches for emergency phrasings.
//! - [`build_tips`] assembles a capped, de-duplicated list of self-care tips.
//!
//! [`TriageEngine`] ties these together over a shared [`KnowledgeBase`].

pub mod detect;
pub mod knowledge;
pub mod normalize;
pub mod tips;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub use detect::{detect_symptoms, has_red_flag};
pub use knowledge::{KnowledgeBase, RedFlagPatternSet, RemedyTable, SymptomSynonymTable};
pub use normalize::normalize;
pub use tips::{DEFAULT_MAX_TIPS, build_tips};

// Types.

/// Outcome of triaging one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    /// Sorted, duplicate-free canonical symptoms.
    pub detected_symptoms: Vec<String>,
    /// Whether an emergency phrasing was found.
    pub is_red_flag: bool,
    /// Self-care tips; always empty when `is_red_flag` is set.
    pub tips: Vec<String>,
}

// Structs.

/// Triage engine over a shared, immutable knowledge base.
///
/// This is trivially cloneable and safe to share across threads.
#[derive(Debug, Clone)]
pub struct TriageEngine {
    kb: Arc<KnowledgeBase>,
    max_tips: usize,
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TriageEngine {
    /// Create an engine over the given tables.
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb, max_tips: DEFAULT_MAX_TIPS }
    }

    /// Create an engine over the builtin tables.
    pub fn builtin() -> Self {
        Self::new(KnowledgeBase::builtin())
    }

    /// Override the tip cap.
    pub fn with_max_tips(mut self, max_tips: usize) -> Self {
        self.max_tips = max_tips;
        self
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn max_tips(&self) -> usize {
        self.max_tips
    }

    pub fn detect_symptoms(&self, text: &str) -> Vec<String> {
        detect_symptoms(&self.kb, text)
    }

    pub fn has_red_flag(&self, text: &str) -> bool {
        has_red_flag(&self.kb, text)
    }

    pub fn build_tips<S: AsRef<str>>(&self, symptoms: &[S]) -> Vec<String> {
        build_tips(&self.kb, symptoms, self.max_tips)
    }

    /// Triage `text`.
    ///
    /// Red-flag and symptom detection always both run. When a red flag fires
    /// no self-care tips are produced; the caller surfaces emergency messaging.
    #[instrument(level = "debug", name = "TriageEngine::triage", skip_all)]
    pub fn triage(&self, text: &str) -> TriageResult {
        let is_red_flag = self.has_red_flag(text);
        let detected_symptoms = self.detect_symptoms(text);

        let tips = if is_red_flag { Vec::new() } else { self.build_tips(&detected_symptoms) };

        debug!(symptoms = ?detected_symptoms, is_red_flag, tips = tips.len(), "Triage complete.");

        TriageResult { detected_symptoms, is_red_flag, tips }
    }
}

// Tests.
