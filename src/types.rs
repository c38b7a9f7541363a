//! Public result types shared across the crate.

use serde::{Deserialize, Serialize};

/// Outcome of a fallback extraction run.
///
/// Extraction is all-or-nothing per file: either some non-empty text was
/// recovered, or a human-readable reason why nothing could be. Failures are
/// reported as data rather than errors so the request layer can always hand
/// the user a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    /// Non-empty recovered content.
    Text(String),
    /// No text recoverable; carries a diagnostic message for the user.
    Unavailable(String),
}

impl ExtractionOutcome {
    /// The recovered text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            ExtractionOutcome::Text(t) => Some(t),
            ExtractionOutcome::Unavailable(_) => None,
        }
    }

    /// The diagnostic message, if extraction produced nothing.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ExtractionOutcome::Text(_) => None,
            ExtractionOutcome::Unavailable(r) => Some(r),
        }
    }

    /// Whether any text was recovered.
    pub fn is_text(&self) -> bool {
        matches!(self, ExtractionOutcome::Text(_))
    }
}
