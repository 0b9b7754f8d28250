use std::fmt;
use std::str::FromStr;

use crate::scoring::models::ScoreInput;

/// Relative weight of each raw sub-score in a blended metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub resume: f64,
    pub screening: f64,
    pub interview: f64,
}

/// Weights of the total score. Must sum to 1.0.
pub const TOTAL_WEIGHTS: ScoreWeights = ScoreWeights::new(0.3, 0.4, 0.3);

// Breakdown blends are independent of the total-score weights.
pub const SKILLS_WEIGHTS: ScoreWeights = ScoreWeights::new(0.4, 0.3, 0.3);
pub const EXPERIENCE_WEIGHTS: ScoreWeights = ScoreWeights::new(0.6, 0.0, 0.4);
pub const COMMUNICATION_WEIGHTS: ScoreWeights = ScoreWeights::new(0.0, 0.5, 0.5);
pub const TECHNICAL_WEIGHTS: ScoreWeights = ScoreWeights::new(0.0, 0.6, 0.4);

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

impl Default for ScoreWeights {
    fn default() -> Self {
        TOTAL_WEIGHTS
    }
}

impl ScoreWeights {
    pub const fn new(resume: f64, screening: f64, interview: f64) -> Self {
        Self {
            resume,
            screening,
            interview,
        }
    }

    pub fn sum(&self) -> f64 {
        self.resume + self.screening + self.interview
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE
    }

    /// Weighted blend of the input's sub-scores.
    ///
    /// With all three sub-scores present this is the plain weighted sum.
    /// Without an interview score the result depends on `policy`.
    pub fn blend(&self, input: &ScoreInput, policy: MissingInterviewPolicy) -> f64 {
        let partial = self.resume * input.resume_score + self.screening * input.screening_score;

        match (input.interview_score, policy) {
            (Some(interview), _) => partial + self.interview * interview,
            (None, MissingInterviewPolicy::ZeroFill) => partial,
            (None, MissingInterviewPolicy::Renormalize) => {
                let present = self.resume + self.screening;
                if present > 0.0 {
                    partial / present
                } else {
                    0.0
                }
            }
        }
    }
}

/// How a blend treats a candidate who has not been interviewed yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingInterviewPolicy {
    /// Scale the remaining weights back up to 1.0.
    #[default]
    Renormalize,
    /// Count the missing interview as 0, which drags the blend down.
    ZeroFill,
}

impl fmt::Display for MissingInterviewPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingInterviewPolicy::Renormalize => f.write_str("renormalize"),
            MissingInterviewPolicy::ZeroFill => f.write_str("zero"),
        }
    }
}

impl FromStr for MissingInterviewPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "renormalize" => Ok(MissingInterviewPolicy::Renormalize),
            "zero" | "zero_fill" => Ok(MissingInterviewPolicy::ZeroFill),
            other => Err(format!(
                "unknown missing-interview policy '{other}' (expected 'renormalize' or 'zero')"
            )),
        }
    }
}
