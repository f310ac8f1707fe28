use std::sync::Arc;

use crate::catalog::Catalog;
use crate::llm_client::StructuredGenerator;
use crate::quiz::matcher::RandomSource;
use crate::quiz::run::RunSequencer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Question and school catalogs. Loaded once at startup, never mutated.
    pub catalog: Arc<Catalog>,
    /// Structured-output text generation. Default: Gemini via `LlmClient`.
    pub generator: Arc<dyn StructuredGenerator>,
    /// Tie-break randomness for the matcher. Default: `ThreadRandom`.
    pub rng: Arc<dyn RandomSource>,
    pub runs: Arc<RunSequencer>,
}
