// Quiz engine: trait matching, AI analysis with fallback, and the HTTP handlers
// that tie them together. All Gemini calls go through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod matcher;
pub mod prompts;
pub mod run;
