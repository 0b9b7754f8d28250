//! Threshold tiers that turn numbers into words: per-criterion feedback lines
//! and the hire recommendation bucket.

use crate::scoring::models::{Recommendation, ScoreBreakdown};

pub const STRONG_THRESHOLD: u32 = 80;
pub const ADEQUATE_THRESHOLD: u32 = 60;

pub const STRONG_HIRE_THRESHOLD: u32 = 85;
pub const HIRE_THRESHOLD: u32 = 75;
pub const MAYBE_THRESHOLD: u32 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Strong,
    Adequate,
    NeedsImprovement,
}

impl FeedbackTier {
    pub fn for_score(score: u32) -> Self {
        match score {
            s if s >= STRONG_THRESHOLD => FeedbackTier::Strong,
            s if s >= ADEQUATE_THRESHOLD => FeedbackTier::Adequate,
            _ => FeedbackTier::NeedsImprovement,
        }
    }
}

/// Breakdown criteria that produce a feedback line, in emission order.
/// `technical` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackDimension {
    Skills,
    Communication,
    Experience,
}

pub const FEEDBACK_ORDER: [FeedbackDimension; 3] = [
    FeedbackDimension::Skills,
    FeedbackDimension::Communication,
    FeedbackDimension::Experience,
];

impl FeedbackDimension {
    pub fn value(&self, breakdown: &ScoreBreakdown) -> u32 {
        match self {
            FeedbackDimension::Skills => breakdown.skills,
            FeedbackDimension::Communication => breakdown.communication,
            FeedbackDimension::Experience => breakdown.experience,
        }
    }

    pub fn message(&self, tier: FeedbackTier) -> &'static str {
        match (self, tier) {
            (FeedbackDimension::Skills, FeedbackTier::Strong) => {
                "Strong skill set for the role"
            }
            (FeedbackDimension::Skills, FeedbackTier::Adequate) => {
                "Adequate skill set, with room to grow"
            }
            (FeedbackDimension::Skills, FeedbackTier::NeedsImprovement) => {
                "Skill set needs improvement"
            }
            (FeedbackDimension::Communication, FeedbackTier::Strong) => {
                "Excellent communication"
            }
            (FeedbackDimension::Communication, FeedbackTier::Adequate) => {
                "Clear, adequate communication"
            }
            (FeedbackDimension::Communication, FeedbackTier::NeedsImprovement) => {
                "Communication needs improvement"
            }
            (FeedbackDimension::Experience, FeedbackTier::Strong) => {
                "Extensive relevant experience"
            }
            (FeedbackDimension::Experience, FeedbackTier::Adequate) => {
                "Solid experience background"
            }
            (FeedbackDimension::Experience, FeedbackTier::NeedsImprovement) => {
                "Relevant experience needs improvement"
            }
        }
    }
}

/// One line per dimension in `FEEDBACK_ORDER`.
pub fn build_feedback(breakdown: &ScoreBreakdown) -> Vec<String> {
    FEEDBACK_ORDER
        .iter()
        .map(|dim| {
            let tier = FeedbackTier::for_score(dim.value(breakdown));
            dim.message(tier).to_string()
        })
        .collect()
}

/// Maps a total score to a hire bucket. Lower bounds are inclusive.
pub fn recommend(total_score: u32) -> Recommendation {
    if total_score >= STRONG_HIRE_THRESHOLD {
        Recommendation::StrongHire
    } else if total_score >= HIRE_THRESHOLD {
        Recommendation::Hire
    } else if total_score >= MAYBE_THRESHOLD {
        Recommendation::Maybe
    } else {
        Recommendation::NoHire
    }
}
