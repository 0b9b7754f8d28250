pub mod config;
pub mod errors;
pub mod routes;
pub mod scoring;
pub mod screening;
pub mod state;

pub use routes::build_router;
pub use scoring::engine::{score, ScoringEngine};
pub use scoring::ranking::{rank, CandidateScores};
