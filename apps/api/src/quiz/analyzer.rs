//! School analysis. Asks the text-generation service for persona / rationale /
//! advice and substitutes a static record on any failure.
//!
//! `analyze` never returns an error. Failures are only visible in the logs.

use tracing::{info, warn};

use crate::llm_client::{strip_json_fences, LlmError, StructuredGenerator};
use crate::models::analysis::AnalysisResult;
use crate::models::catalog::{School, Trait};
use crate::quiz::prompts::{
    analysis_schema, ANALYSIS_PROMPT_TEMPLATE, FALLBACK_ADVICE, FALLBACK_PERSONA,
    FALLBACK_TRAIT_WORD, FALLBACK_WHY_MATCH_TEMPLATE,
};

/// Produces the analysis for a matched school. Exactly one outbound call.
pub async fn analyze(
    school: &School,
    top_traits: &[Trait],
    generator: &dyn StructuredGenerator,
) -> AnalysisResult {
    match request_analysis(school, top_traits, generator).await {
        Ok(result) => {
            info!("AI analysis generated for {}", school.short_name);
            result
        }
        Err(e) => {
            warn!(
                "AI analysis failed for {}, using fallback: {e}",
                school.short_name
            );
            fallback_analysis(school, top_traits)
        }
    }
}

async fn request_analysis(
    school: &School,
    top_traits: &[Trait],
    generator: &dyn StructuredGenerator,
) -> Result<AnalysisResult, LlmError> {
    let prompt = build_analysis_prompt(school, top_traits);
    let text = generator
        .generate_structured(&prompt, &analysis_schema())
        .await?;
    parse_analysis(&text)
}

fn parse_analysis(text: &str) -> Result<AnalysisResult, LlmError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(LlmError::EmptyContent);
    }

    let result: AnalysisResult = serde_json::from_str(text)?;
    if result.has_blank_field() {
        return Err(LlmError::Malformed(
            "analysis contains an empty field".to_string(),
        ));
    }
    Ok(result)
}

pub fn build_analysis_prompt(school: &School, top_traits: &[Trait]) -> String {
    let traits = top_traits
        .iter()
        .map(Trait::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    ANALYSIS_PROMPT_TEMPLATE
        .replace("{school_name}", &school.name)
        .replace("{short_name}", &school.short_name)
        .replace("{traits}", &traits)
}

/// Network-free result. Names the strongest trait, else the school's first tag.
pub fn fallback_analysis(school: &School, top_traits: &[Trait]) -> AnalysisResult {
    let leading = top_traits
        .first()
        .or_else(|| school.tags.first())
        .map(Trait::as_str)
        .unwrap_or(FALLBACK_TRAIT_WORD);

    AnalysisResult {
        persona: FALLBACK_PERSONA.to_string(),
        why_match: FALLBACK_WHY_MATCH_TEMPLATE
            .replace("{trait}", leading)
            .replace("{short_name}", &school.short_name),
        advice: FALLBACK_ADVICE.to_string(),
    }
}
