use std::time::Duration;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::Language;

/// Literal marker looked for in generated content. This is a substring
/// check, not language detection.
pub const ENGLISH_MARKER: &str = "English";

/// Bookkeeping for one run of the generate flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenerationMetric {
    pub timestamp: String,
    pub generation_duration_seconds: f64,
    /// Length of the returned content in characters.
    #[ts(type = "number")]
    pub content_length: usize,
    pub language: Language,
    pub contains_english_marker: bool,
    pub error_occurred: bool,
}

impl GenerationMetric {
    /// Derive the metric from the content a flow returned.
    ///
    /// `error_occurred` is always `false`: a failed generation yields sentinel
    /// content that is measured like any other text.
    pub fn measure(content: &str, language: Language, elapsed: Duration, timestamp: String) -> Self {
        Self {
            timestamp,
            generation_duration_seconds: elapsed.as_secs_f64(),
            content_length: content.chars().count(),
            language,
            contains_english_marker: content.contains(ENGLISH_MARKER),
            error_occurred: false,
        }
    }
}
