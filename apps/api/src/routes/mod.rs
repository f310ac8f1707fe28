pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::quiz::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/questions", get(handlers::handle_get_questions))
        .route("/api/v1/schools", get(handlers::handle_get_schools))
        .route("/api/v1/schools/:id", get(handlers::handle_get_school))
        // Quiz API
        .route("/api/v1/quiz/result", post(handlers::handle_quiz_result))
        .with_state(state)
}
