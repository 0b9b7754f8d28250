use rayon::prelude::*;
use tracing::debug;

use crate::scoring::engine::ScoringEngine;
use crate::scoring::models::{RankedCandidate, ScoreInput, ScoringResult};
use crate::scoring::validation::InvalidInput;

/// A candidate waiting to be ranked.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScores {
    pub id: String,
    pub input: ScoreInput,
}

impl CandidateScores {
    pub fn new(id: impl Into<String>, input: ScoreInput) -> Self {
        Self {
            id: id.into(),
            input,
        }
    }
}

impl ScoringEngine {
    /// Scores every candidate and orders them best-first.
    ///
    /// Candidates are scored in parallel, then stably sorted by total score
    /// descending: equal totals keep their input order. Ranks are positional
    /// (1, 2, 3, ...) with no gaps and no shared ranks on ties.
    ///
    /// One invalid candidate fails the whole batch; the error names the first
    /// offending candidate in input order.
    pub fn rank(
        &self,
        candidates: &[CandidateScores],
    ) -> Result<Vec<RankedCandidate>, InvalidInput> {
        let scored: Vec<Result<ScoringResult, InvalidInput>> = candidates
            .par_iter()
            .map(|c| self.score(&c.input))
            .collect();

        let mut results = Vec::with_capacity(candidates.len());
        for (candidate, outcome) in candidates.iter().zip(scored) {
            let result = outcome.map_err(|e| e.for_candidate(candidate.id.clone()))?;
            results.push((candidate.id.clone(), result));
        }

        // `sort_by` is stable; ties fall back to input order.
        results.sort_by(|a, b| b.1.total_score.cmp(&a.1.total_score));

        let ranked: Vec<RankedCandidate> = results
            .into_iter()
            .enumerate()
            .map(|(i, (id, result))| RankedCandidate {
                id,
                result,
                rank: i + 1,
            })
            .collect();

        debug!(candidates = ranked.len(), "Ranked candidate batch");
        Ok(ranked)
    }
}

/// Ranks candidates with the default engine.
pub fn rank(candidates: &[CandidateScores]) -> Result<Vec<RankedCandidate>, InvalidInput> {
    ScoringEngine::default().rank(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::validation::{RESUME_SCORE, SCREENING_SCORE};
    use proptest::prelude::*;

    fn candidate(id: &str, r: f64, s: f64, i: f64) -> CandidateScores {
        CandidateScores::new(id, ScoreInput::new(r, s, Some(i)))
    }

    fn ids(ranked: &[RankedCandidate]) -> Vec<&str> {
        ranked.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_empty_batch_is_empty() {
        assert!(rank(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_sorted_by_total_descending() {
        let ranked = rank(&[
            candidate("low", 50.0, 50.0, 50.0),
            candidate("high", 95.0, 95.0, 95.0),
            candidate("mid", 75.0, 75.0, 75.0),
        ])
        .unwrap();
        assert_eq!(ids(&ranked), vec!["high", "mid", "low"]);
        assert_eq!(ranked[0].result.total_score, 95);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_ties_keep_input_order_and_get_consecutive_ranks() {
        let ranked = rank(&[
            candidate("a", 70.0, 70.0, 70.0),
            candidate("b", 70.0, 70.0, 70.0),
        ])
        .unwrap();
        assert_eq!(ids(&ranked), vec!["a", "b"]);
        assert_eq!(ranked[0].result.total_score, ranked[1].result.total_score);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_ties_behind_a_leader_stay_stable() {
        let ranked = rank(&[
            candidate("tie-1", 60.0, 60.0, 60.0),
            candidate("leader", 90.0, 90.0, 90.0),
            candidate("tie-2", 60.0, 60.0, 60.0),
            candidate("tie-3", 60.0, 60.0, 60.0),
        ])
        .unwrap();
        assert_eq!(ids(&ranked), vec!["leader", "tie-1", "tie-2", "tie-3"]);
    }

    #[test]
    fn test_one_bad_candidate_fails_the_batch() {
        let err = rank(&[
            candidate("ok", 70.0, 70.0, 70.0),
            candidate("broken", 150.0, 70.0, 70.0),
            candidate("also-broken", 70.0, -5.0, 70.0),
        ])
        .unwrap_err();

        match err {
            InvalidInput::Candidate { id, reason } => {
                assert_eq!(id, "broken");
                assert!(matches!(
                    *reason,
                    InvalidInput::OutOfRange {
                        field: RESUME_SCORE,
                        ..
                    }
                ));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_reports_first_offender_in_input_order() {
        let err = rank(&[
            candidate("first", 70.0, 101.0, 70.0),
            candidate("second", 170.0, 70.0, 70.0),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            InvalidInput::Candidate { ref id, ref reason }
                if id == "first"
                    && matches!(**reason, InvalidInput::OutOfRange { field: SCREENING_SCORE, .. })
        ));
    }

    fn candidates() -> impl Strategy<Value = Vec<CandidateScores>> {
        // Integer scores on a small range so ties are common.
        prop::collection::vec((60u32..=70, 60u32..=70, 60u32..=70), 0..40).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(n, (r, s, i))| {
                    candidate(&format!("c{n}"), r as f64, s as f64, i as f64)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn ranks_are_dense(batch in candidates()) {
            let ranked = rank(&batch).unwrap();
            let ranks: Vec<usize> = ranked.iter().map(|c| c.rank).collect();
            let expected: Vec<usize> = (1..=batch.len()).collect();
            prop_assert_eq!(ranks, expected);
        }

        #[test]
        fn ranking_is_idempotent(batch in candidates()) {
            prop_assert_eq!(rank(&batch).unwrap(), rank(&batch).unwrap());
        }

        #[test]
        fn ranking_is_sorted_and_stable(batch in candidates()) {
            let ranked = rank(&batch).unwrap();
            let position = |id: &str| batch.iter().position(|c| c.id == id).unwrap();
            for pair in ranked.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.result.total_score >= b.result.total_score);
                if a.result.total_score == b.result.total_score {
                    prop_assert!(position(&a.id) < position(&b.id));
                }
            }
        }
    }
}
