//! Axum route handlers for the Scoring API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::scoring::models::{
    RankedCandidate, Recommendation, ScoreBreakdown, ScoreInput, ScoringResult,
};
use crate::scoring::ranking::CandidateScores;
use crate::scoring::validation::{
    number_from_json, InvalidInput, INTERVIEW_SCORE, RESUME_SCORE, SCREENING_SCORE,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Raw sub-scores as posted by a client.
///
/// Scores are kept as raw JSON values so that a string or boolean surfaces
/// as a field-specific `InvalidInput` instead of a generic body rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScores {
    pub resume_score: Option<Value>,
    pub screening_score: Option<Value>,
    pub interview_score: Option<Value>,
}

impl RawScores {
    pub fn to_input(&self) -> Result<ScoreInput, InvalidInput> {
        ScoreInput::from_parts(
            number_from_json(RESUME_SCORE, self.resume_score.as_ref())?,
            number_from_json(SCREENING_SCORE, self.screening_score.as_ref())?,
            number_from_json(INTERVIEW_SCORE, self.interview_score.as_ref())?,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub candidate_id: Option<String>,
    #[serde(flatten)]
    pub scores: RawScores,
}

#[derive(Debug, Deserialize)]
pub struct RankEntry {
    pub id: String,
    #[serde(flatten)]
    pub scores: RawScores,
}

#[derive(Debug, Serialize)]
pub struct RankedCandidateResponse {
    pub id: String,
    pub score: u32,
    pub rank: usize,
    pub breakdown: ScoreBreakdown,
    pub feedback: Vec<String>,
    pub recommendation: Recommendation,
}

impl From<RankedCandidate> for RankedCandidateResponse {
    fn from(candidate: RankedCandidate) -> Self {
        Self {
            id: candidate.id,
            score: candidate.result.total_score,
            rank: candidate.rank,
            breakdown: candidate.result.breakdown,
            feedback: candidate.result.feedback,
            recommendation: candidate.result.recommendation,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/scoring
///
/// Scores a single candidate from its resume, screening and (optional)
/// interview sub-scores.
pub async fn handle_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoringResult>, AppError> {
    let Json(request) = payload?;

    let input = request.scores.to_input()?;
    let result = state.engine.score(&input)?;

    info!(
        candidate_id = request.candidate_id.as_deref().unwrap_or("-"),
        total_score = result.total_score,
        recommendation = result.recommendation.as_str(),
        "Scored candidate"
    );

    Ok(Json(result))
}

/// POST /api/v1/candidates/rank
///
/// Scores a batch of candidates and returns them best-first with dense ranks.
/// A single malformed candidate rejects the whole batch.
pub async fn handle_rank(
    State(state): State<AppState>,
    payload: Result<Json<Vec<RankEntry>>, JsonRejection>,
) -> Result<Json<Vec<RankedCandidateResponse>>, AppError> {
    let Json(entries) = payload?;

    if entries.len() > state.config.max_rank_batch {
        return Err(AppError::Validation(format!(
            "Ranking accepts at most {} candidates, got {}",
            state.config.max_rank_batch,
            entries.len()
        )));
    }

    let candidates = entries
        .iter()
        .map(|entry| {
            entry
                .scores
                .to_input()
                .map(|input| CandidateScores::new(entry.id.clone(), input))
                .map_err(|e| e.for_candidate(entry.id.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let ranked = state.engine.rank(&candidates)?;

    info!(candidates = ranked.len(), "Ranked candidates");

    Ok(Json(
        ranked
            .into_iter()
            .map(RankedCandidateResponse::from)
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_scores_accept_missing_interview() {
        let raw: RawScores =
            serde_json::from_value(json!({"resumeScore": 80, "screeningScore": 70.5})).unwrap();
        assert_eq!(raw.to_input(), Ok(ScoreInput::new(80.0, 70.5, None)));
    }

    #[test]
    fn test_raw_scores_reject_string_score() {
        let raw: RawScores = serde_json::from_value(
            json!({"resumeScore": "80", "screeningScore": 70, "interviewScore": 60}),
        )
        .unwrap();
        assert_eq!(
            raw.to_input(),
            Err(InvalidInput::NotANumber {
                field: RESUME_SCORE
            })
        );
    }

    #[test]
    fn test_score_request_flattens_scores() {
        let request: ScoreRequest = serde_json::from_value(json!({
            "candidateId": "c-1",
            "resumeScore": 90,
            "screeningScore": 90,
            "interviewScore": null
        }))
        .unwrap();
        assert_eq!(request.candidate_id.as_deref(), Some("c-1"));
        assert_eq!(
            request.scores.to_input(),
            Ok(ScoreInput::new(90.0, 90.0, None))
        );
    }

    #[test]
    fn test_ranked_response_field_names() {
        let ranked = RankedCandidate {
            id: "a".to_string(),
            rank: 1,
            result: ScoringResult {
                total_score: 88,
                breakdown: ScoreBreakdown {
                    skills: 88,
                    experience: 88,
                    communication: 88,
                    technical: 88,
                },
                feedback: vec![],
                recommendation: Recommendation::StrongHire,
            },
        };
        let value = serde_json::to_value(RankedCandidateResponse::from(ranked)).unwrap();
        assert_eq!(value["id"], "a");
        assert_eq!(value["score"], 88);
        assert_eq!(value["rank"], 1);
        assert_eq!(value["recommendation"], "strong-hire");
    }
}
