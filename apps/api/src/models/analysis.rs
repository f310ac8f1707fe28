use serde::{Deserialize, Serialize};

/// The three strings that flesh out a match. Field names follow the schema
/// sent to the text-generation service (`whyMatch` in camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub persona: String,
    pub why_match: String,
    pub advice: String,
}

impl AnalysisResult {
    /// True when any field is empty or whitespace-only.
    pub fn has_blank_field(&self) -> bool {
        [&self.persona, &self.why_match, &self.advice]
            .iter()
            .any(|s| s.trim().is_empty())
    }
}
