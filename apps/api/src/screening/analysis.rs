//! Voice screening analysis.
//!
//! Turns a candidate's transcribed screening answers into a 0–100 screening
//! score. Transcription and audio-derived signals (speaker confidence,
//! communication quality) come from the voice platform; everything computed
//! here is a deterministic function of the text and those signals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::engine::round_score;
use crate::scoring::feedback::recommend;
use crate::scoring::models::Recommendation;
use crate::scoring::validation::{check_range, check_score, InvalidInput};

pub const RESPONSES: &str = "responses";
pub const CONFIDENCE: &str = "confidence";
pub const COMMUNICATION_SCORE: &str = "communicationScore";
pub const DURATION_SECS: &str = "durationSecs";

const POSITIVE_WORDS: &[&str] = &["excited", "passionate", "love", "enjoy", "great", "excellent"];
const NEGATIVE_WORDS: &[&str] = &["difficult", "challenging", "struggle", "hard", "problem"];
const TECHNICAL_TERMS: &[&str] = &[
    "algorithm",
    "database",
    "api",
    "framework",
    "architecture",
    "scalability",
];

// A single screening answer never runs longer than an hour.
pub const MAX_RESPONSE_DURATION_SECS: f64 = 3600.0;

const MAX_KEY_POINTS: usize = 3;
const MIN_KEY_POINT_CHARS: usize = 10;
const POINTS_PER_TECHNICAL_TERM: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResponse {
    pub question_id: String,
    #[serde(default)]
    pub question: String,
    pub transcript: String,
    #[serde(default)]
    pub duration_secs: Option<f64>,
    /// Speaker confidence reported by the voice platform, 0.0–1.0.
    pub confidence: f64,
    /// Delivery quality reported by the voice platform, 0–100.
    pub communication_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseAnalysis {
    pub question_id: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub key_points: Vec<String>,
    pub technical_accuracy: u32,
    pub communication_score: f64,
}

impl ResponseAnalysis {
    /// Mean of confidence (as a percentage), technical accuracy and
    /// communication score.
    pub fn score(&self) -> f64 {
        (self.confidence * 100.0 + self.technical_accuracy as f64 + self.communication_score) / 3.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningReport {
    pub candidate_id: String,
    pub questions: Vec<String>,
    pub analyses: Vec<ResponseAnalysis>,
    pub score: u32,
    pub recommendation: Recommendation,
    pub transcript: String,
    pub duration_secs: f64,
    pub completed_at: DateTime<Utc>,
}

fn words(transcript: &str) -> impl Iterator<Item = String> + '_ {
    transcript
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
}

pub fn analyze_sentiment(transcript: &str) -> Sentiment {
    let (mut positive, mut negative) = (0usize, 0usize);
    for word in words(transcript) {
        if POSITIVE_WORDS.contains(&word.as_str()) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&word.as_str()) {
            negative += 1;
        }
    }

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

/// First few sentences of the answer, skipping fragments too short to say
/// anything.
pub fn extract_key_points(transcript: &str) -> Vec<String> {
    transcript
        .split('.')
        .take(MAX_KEY_POINTS)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_KEY_POINT_CHARS)
        .map(str::to_string)
        .collect()
}

/// 20 points per word starting with a technical term ("apis", "databases"),
/// capped at 100. Terms inside other words ("rapidly") do not count.
pub fn assess_technical_accuracy(transcript: &str) -> u32 {
    let hits = words(transcript)
        .filter(|w| TECHNICAL_TERMS.iter().any(|term| w.starts_with(term)))
        .count() as u32;
    hits.saturating_mul(POINTS_PER_TECHNICAL_TERM).min(100)
}

fn validate_response(response: &ScreeningResponse) -> Result<(), InvalidInput> {
    check_range(CONFIDENCE, response.confidence, 0.0, 1.0)?;
    check_score(COMMUNICATION_SCORE, response.communication_score)?;
    if let Some(duration) = response.duration_secs {
        check_range(DURATION_SECS, duration, 0.0, MAX_RESPONSE_DURATION_SECS)?;
    }
    Ok(())
}

pub fn analyze_response(response: &ScreeningResponse) -> ResponseAnalysis {
    ResponseAnalysis {
        question_id: response.question_id.clone(),
        sentiment: analyze_sentiment(&response.transcript),
        confidence: response.confidence,
        key_points: extract_key_points(&response.transcript),
        technical_accuracy: assess_technical_accuracy(&response.transcript),
        communication_score: response.communication_score,
    }
}

/// Analyzes every answer and aggregates them into a screening report.
pub fn analyze_screening(
    candidate_id: &str,
    responses: &[ScreeningResponse],
) -> Result<ScreeningReport, InvalidInput> {
    if responses.is_empty() {
        return Err(InvalidInput::Empty { field: RESPONSES });
    }
    for (index, response) in responses.iter().enumerate() {
        validate_response(response).map_err(|e| e.for_response(index))?;
    }

    let analyses: Vec<ResponseAnalysis> = responses.iter().map(analyze_response).collect();
    let mean = analyses.iter().map(ResponseAnalysis::score).sum::<f64>() / analyses.len() as f64;
    let score = round_score(mean);

    let questions = responses.iter().map(|r| r.question.clone()).collect();
    let transcript = responses
        .iter()
        .map(|r| r.transcript.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let duration_secs = responses.iter().filter_map(|r| r.duration_secs).sum();

    Ok(ScreeningReport {
        candidate_id: candidate_id.to_string(),
        questions,
        analyses,
        score,
        recommendation: recommend(score),
        transcript,
        duration_secs,
        completed_at: Utc::now(),
    })
}
