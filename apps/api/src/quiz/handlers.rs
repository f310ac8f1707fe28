//! Axum route handlers for the Quiz API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::models::catalog::{Question, School, Trait};
use crate::quiz::analyzer::analyze;
use crate::quiz::matcher::{match_school, TraitTally};
use crate::quiz::run::RunId;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuizResultRequest {
    /// Chosen option index for each question, in question order.
    pub answers: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct QuizResultResponse {
    pub run_id: RunId,
    pub school: School,
    pub raw_score: u32,
    pub top_traits: Vec<Trait>,
    pub tally: TraitTally,
    pub analysis: AnalysisResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/questions
pub async fn handle_get_questions(State(state): State<AppState>) -> Json<Vec<Question>> {
    Json(state.catalog.questions.clone())
}

/// GET /api/v1/schools
pub async fn handle_get_schools(State(state): State<AppState>) -> Json<Vec<School>> {
    Json(state.catalog.schools.clone())
}

/// GET /api/v1/schools/:id
pub async fn handle_get_school(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<School>, AppError> {
    state
        .catalog
        .school(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("School '{id}' not found")))
}

/// POST /api/v1/quiz/result
///
/// answers → traits → match → AI analysis (or fallback). AI failures never
/// surface as errors; only invalid answers do.
pub async fn handle_quiz_result(
    State(state): State<AppState>,
    Json(request): Json<QuizResultRequest>,
) -> Result<Json<QuizResultResponse>, AppError> {
    let traits = state.catalog.collect_traits(&request.answers)?;
    let run_id = state.runs.next();

    let outcome = match_school(&traits, &state.catalog.schools, state.rng.as_ref())?;
    info!(
        "Run {}: matched {} (score {}) from {} traits",
        run_id.0,
        outcome.school.id,
        outcome.raw_score,
        outcome.tally.total()
    );

    let analysis = analyze(outcome.school, &outcome.top_traits, state.generator.as_ref()).await;

    Ok(Json(QuizResultResponse {
        run_id,
        school: outcome.school.clone(),
        raw_score: outcome.raw_score,
        top_traits: outcome.top_traits,
        tally: outcome.tally,
        analysis,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
