//! Candidate scoring engine.
//!
//! Combines the resume, screening and interview sub-scores into one total,
//! a four-criterion breakdown, feedback lines and a hire recommendation.
//! Pure and deterministic: no I/O, no randomness, no hidden state, so a
//! single engine can be shared freely across threads.

use crate::scoring::feedback::{build_feedback, recommend};
use crate::scoring::models::{ScoreBreakdown, ScoreInput, ScoringResult};
use crate::scoring::validation::InvalidInput;
use crate::scoring::weights::{
    MissingInterviewPolicy, ScoreWeights, COMMUNICATION_WEIGHTS, EXPERIENCE_WEIGHTS,
    SKILLS_WEIGHTS, TECHNICAL_WEIGHTS, TOTAL_WEIGHTS,
};

// Relative slack, in units of f64::EPSILON, for rounding error left by the
// weighted sums (0.3x + 0.4x + 0.3x is not always exactly x).
const ROUNDING_ULPS: f64 = 8.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoringEngine {
    pub missing_interview: MissingInterviewPolicy,
}

impl ScoringEngine {
    pub fn new(missing_interview: MissingInterviewPolicy) -> Self {
        Self { missing_interview }
    }

    pub fn score(&self, input: &ScoreInput) -> Result<ScoringResult, InvalidInput> {
        input.validate()?;

        let total_score = self.blend(&TOTAL_WEIGHTS, input);
        let breakdown = ScoreBreakdown {
            skills: self.blend(&SKILLS_WEIGHTS, input),
            experience: self.blend(&EXPERIENCE_WEIGHTS, input),
            communication: self.blend(&COMMUNICATION_WEIGHTS, input),
            technical: self.blend(&TECHNICAL_WEIGHTS, input),
        };

        Ok(ScoringResult {
            total_score,
            feedback: build_feedback(&breakdown),
            recommendation: recommend(total_score),
            breakdown,
        })
    }

    fn blend(&self, weights: &ScoreWeights, input: &ScoreInput) -> u32 {
        round_score(weights.blend(input, self.missing_interview))
    }
}

/// Scores one candidate with the default engine (missing interviews are
/// re-normalized away).
pub fn score(input: &ScoreInput) -> Result<ScoringResult, InvalidInput> {
    ScoringEngine::default().score(input)
}

/// Round-half-up onto the 0–100 integer scale.
///
/// The slack scales with the magnitude of `value`, so it only absorbs
/// arithmetic noise: 84.4999999995 still rounds down.
pub fn round_score(value: f64) -> u32 {
    let slack = value.abs().max(1.0) * ROUNDING_ULPS * f64::EPSILON;
    (value + 0.5 + slack).floor().clamp(0.0, 100.0) as u32
}
