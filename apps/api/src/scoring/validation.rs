use serde_json::Value;
use thiserror::Error;

pub const RESUME_SCORE: &str = "resumeScore";
pub const SCREENING_SCORE: &str = "screeningScore";
pub const INTERVIEW_SCORE: &str = "interviewScore";

/// Lower and upper bound (inclusive) of every 0–100 sub-score.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// The only recoverable failure of the scoring and screening code.
///
/// Scores are never clamped into range: an out-of-range value means an
/// upstream producer is broken, and the caller has to hear about it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must contain at least one entry")]
    Empty { field: &'static str },

    #[error("candidate '{id}': {reason}")]
    Candidate {
        id: String,
        #[source]
        reason: Box<InvalidInput>,
    },

    #[error("response {index}: {reason}")]
    Response {
        index: usize,
        #[source]
        reason: Box<InvalidInput>,
    },
}

impl InvalidInput {
    /// Attaches a candidate id so a batch failure points at the culprit.
    pub fn for_candidate(self, id: impl Into<String>) -> Self {
        InvalidInput::Candidate {
            id: id.into(),
            reason: Box::new(self),
        }
    }

    pub fn for_response(self, index: usize) -> Self {
        InvalidInput::Response {
            index,
            reason: Box::new(self),
        }
    }
}

/// Checks that `value` is finite and inside `[min, max]`.
pub fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, InvalidInput> {
    if !value.is_finite() {
        return Err(InvalidInput::NotANumber { field });
    }
    if value < min || value > max {
        return Err(InvalidInput::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

pub fn check_score(field: &'static str, value: f64) -> Result<f64, InvalidInput> {
    check_range(field, value, SCORE_MIN, SCORE_MAX)
}

/// Coerces an optional raw JSON value into a number.
///
/// `None` and JSON `null` both mean "absent". Strings, booleans, arrays and
/// objects are rejected rather than parsed.
pub fn number_from_json(
    field: &'static str,
    raw: Option<&Value>,
) -> Result<Option<f64>, InvalidInput> {
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or(InvalidInput::NotANumber { field }),
        Some(_) => Err(InvalidInput::NotANumber { field }),
    }
}

pub fn required_number(field: &'static str, raw: Option<&Value>) -> Result<f64, InvalidInput> {
    number_from_json(field, raw)?.ok_or(InvalidInput::Missing { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(check_score(RESUME_SCORE, 0.0), Ok(0.0));
        assert_eq!(check_score(RESUME_SCORE, 100.0), Ok(100.0));
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        let err = check_score(RESUME_SCORE, 150.0).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::OutOfRange {
                field: RESUME_SCORE,
                value: 150.0,
                min: 0.0,
                max: 100.0
            }
        );
        assert!(check_score(RESUME_SCORE, -1.0).is_err());
    }

    #[test]
    fn test_nan_and_infinity_are_not_numbers() {
        assert_eq!(
            check_score(SCREENING_SCORE, f64::NAN),
            Err(InvalidInput::NotANumber {
                field: SCREENING_SCORE
            })
        );
        assert!(check_score(SCREENING_SCORE, f64::INFINITY).is_err());
    }

    #[test]
    fn test_json_null_counts_as_absent() {
        assert_eq!(number_from_json(INTERVIEW_SCORE, Some(&Value::Null)), Ok(None));
        assert_eq!(number_from_json(INTERVIEW_SCORE, None), Ok(None));
    }

    #[test]
    fn test_json_string_is_rejected() {
        let raw = json!("85");
        assert_eq!(
            number_from_json(RESUME_SCORE, Some(&raw)),
            Err(InvalidInput::NotANumber {
                field: RESUME_SCORE
            })
        );
    }

    #[test]
    fn test_required_number_reports_missing_field() {
        assert_eq!(
            required_number(SCREENING_SCORE, None),
            Err(InvalidInput::Missing {
                field: SCREENING_SCORE
            })
        );
        assert_eq!(required_number(SCREENING_SCORE, Some(&json!(72))), Ok(72.0));
    }

    #[test]
    fn test_candidate_context_in_message() {
        let err = InvalidInput::Missing {
            field: SCREENING_SCORE,
        }
        .for_candidate("cand-7");
        assert_eq!(err.to_string(), "candidate 'cand-7': screeningScore is required");
    }
}
