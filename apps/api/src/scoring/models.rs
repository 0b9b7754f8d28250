use serde::{Deserialize, Serialize};

use crate::scoring::validation::{
    check_score, InvalidInput, INTERVIEW_SCORE, RESUME_SCORE, SCREENING_SCORE,
};

/// Sub-scores for one candidate against one job, each on a 0–100 scale.
///
/// Produced by external collaborators: the resume parser, the voice
/// screening analyzer and the interview platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreInput {
    pub resume_score: f64,
    pub screening_score: f64,
    /// Absent until the candidate has been interviewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_score: Option<f64>,
}

impl ScoreInput {
    pub fn new(resume_score: f64, screening_score: f64, interview_score: Option<f64>) -> Self {
        Self {
            resume_score,
            screening_score,
            interview_score,
        }
    }

    /// Builds an input from possibly-missing parts, validating every score.
    pub fn from_parts(
        resume_score: Option<f64>,
        screening_score: Option<f64>,
        interview_score: Option<f64>,
    ) -> Result<Self, InvalidInput> {
        let input = Self {
            resume_score: resume_score.ok_or(InvalidInput::Missing {
                field: RESUME_SCORE,
            })?,
            screening_score: screening_score.ok_or(InvalidInput::Missing {
                field: SCREENING_SCORE,
            })?,
            interview_score,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<(), InvalidInput> {
        check_score(RESUME_SCORE, self.resume_score)?;
        check_score(SCREENING_SCORE, self.screening_score)?;
        if let Some(interview) = self.interview_score {
            check_score(INTERVIEW_SCORE, interview)?;
        }
        Ok(())
    }
}

/// Per-criterion view of a candidate, each value rounded to 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub experience: u32,
    pub communication: u32,
    pub technical: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    StrongHire,
    Hire,
    Maybe,
    NoHire,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::StrongHire => "strong-hire",
            Recommendation::Hire => "hire",
            Recommendation::Maybe => "maybe",
            Recommendation::NoHire => "no-hire",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub total_score: u32,
    pub breakdown: ScoreBreakdown,
    pub feedback: Vec<String>,
    pub recommendation: Recommendation,
}

/// A scored candidate with its 1-based position in the ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    pub id: String,
    pub result: ScoringResult,
    pub rank: usize,
}
