use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::screening::analysis::{analyze_screening, ScreeningReport, ScreeningResponse};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningRequest {
    pub candidate_id: String,
    pub responses: Vec<ScreeningResponse>,
}

/// POST /api/v1/ai/voice-screening
///
/// Analyzes transcribed screening answers and returns the screening score
/// to feed into `/api/v1/ai/scoring`. Nothing is stored.
pub async fn handle_voice_screening(
    payload: Result<Json<ScreeningRequest>, JsonRejection>,
) -> Result<Json<ScreeningReport>, AppError> {
    let Json(request) = payload?;

    if request.candidate_id.trim().is_empty() {
        return Err(AppError::Validation(
            "candidateId cannot be empty".to_string(),
        ));
    }

    let report = analyze_screening(&request.candidate_id, &request.responses)?;

    info!(
        candidate_id = %report.candidate_id,
        responses = report.analyses.len(),
        score = report.score,
        "Screening analyzed"
    );

    Ok(Json(report))
}
