use crate::config::Config;
use crate::scoring::engine::ScoringEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    /// Stateless; cloned per request.
    pub engine: ScoringEngine,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let engine = ScoringEngine::new(config.missing_interview_policy);
        Self { config, engine }
    }
}
