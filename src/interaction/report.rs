//! Plain-text rendering of a triage result.

use crate::{
    base::prompts::{DISCLAIMER, EMERGENCY_WARNING, NO_SYMPTOMS_MESSAGE},
    engine::TriageResult,
};

/// Render `result` as the report shown to the user.
///
/// The layout is: a summary line, then either the emergency warning or the
/// bulleted self-care tips, then the educational disclaimer.
pub fn render_report(result: &TriageResult) -> String {
    let mut sections = Vec::new();

    if result.detected_symptoms.is_empty() {
        sections.push(format!("Summary\n{NO_SYMPTOMS_MESSAGE}"));
    } else {
        sections.push(format!("Summary\nDetected symptoms: {}", result.detected_symptoms.join(", ")));
    }

    if result.is_red_flag {
        sections.push(format!("!! {EMERGENCY_WARNING}"));
    } else if !result.tips.is_empty() {
        let tips = result.tips.iter().map(|tip| format!("- {tip}")).collect::<Vec<_>>().join("\n");
        sections.push(format!("General Self-Care Tips\n{tips}"));
    }

    sections.push(format!("Note: {DISCLAIMER}"));

    sections.join("\n\n")
}

// Tests.
