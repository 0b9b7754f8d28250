// Candidate scoring: sub-score blending, feedback, recommendation buckets,
// and best-first ranking of a candidate pool.

pub mod engine;
pub mod feedback;
pub mod handlers;
pub mod models;
pub mod ranking;
pub mod validation;
pub mod weights;
