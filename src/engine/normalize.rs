//! Text normalization shared by every detector.

/// Collapse whitespace runs into single spaces, trim, and lower-case.
///
/// Detectors always run on the output of this function, so synonym phrases
/// and red-flag patterns are written in lower case with single spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

// Tests.
