//! Service-level error taxonomy

use crate::ports::solver::SolveError;
use quizcheck_domain::{MatchError, ResponseParseError, ShapeError};
use thiserror::Error;

/// Errors surfaced by the use cases
///
/// | Variant | Cause |
/// |---------|-------|
/// | `Configuration` | Delegate credential missing |
/// | `Upstream` | Delegate unreachable or non-success status |
/// | `Parse` | Reply not valid JSON or missing a required field |
/// | `Shape` | Wrong choice count, out-of-range index |
/// | `Match` | No choice matches the computed answer |
/// | `Internal` | Anything unexpected |
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid question: {0}")]
    Shape(#[from] ShapeError),

    #[error("{0}")]
    Match(#[from] MatchError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Configuration(_) => "configuration_error",
            ServiceError::Upstream(_) => "upstream_error",
            ServiceError::Parse(_) => "parse_error",
            ServiceError::Shape(_) => "shape_error",
            ServiceError::Match(_) => "match_error",
            ServiceError::Internal(_) => "internal_error",
        }
    }
}

impl From<SolveError> for ServiceError {
    fn from(error: SolveError) -> Self {
        match error {
            SolveError::Gateway(e) if e.is_upstream() => ServiceError::Upstream(e.to_string()),
            SolveError::Gateway(e) => ServiceError::Parse(e.to_string()),
            SolveError::Parse(ResponseParseError::InvalidSelection(e)) => ServiceError::Shape(e),
            SolveError::Parse(e) => ServiceError::Parse(e.to_string()),
        }
    }
}
