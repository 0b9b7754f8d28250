pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::scoring::handlers as scoring;
use crate::screening::handlers as screening;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring API
        .route("/api/v1/ai/scoring", post(scoring::handle_score))
        .route("/api/v1/candidates/rank", post(scoring::handle_rank))
        // Screening API
        .route(
            "/api/v1/ai/voice-screening",
            post(screening::handle_voice_screening),
        )
        .fallback(not_found)
        .with_state(state)
}
