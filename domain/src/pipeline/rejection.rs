//! Diagnostic records for dropped candidates

use super::stage::CandidateStage;
use crate::choice::matcher::MatchError;
use crate::core::error::ShapeError;
use crate::question::candidate::QuestionCandidate;
use crate::solver::parsing::ResponseParseError;
use thiserror::Error;

/// Why a candidate was dropped from a batch
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RejectionReason {
    #[error("Invalid shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("Delegate call failed: {0}")]
    Upstream(String),

    #[error("Delegate reply unusable: {0}")]
    Parse(#[from] ResponseParseError),

    #[error("{0}")]
    NoMatch(#[from] MatchError),
}

impl RejectionReason {
    /// Short machine-readable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::Shape(_) => "shape",
            RejectionReason::Upstream(_) => "upstream",
            RejectionReason::Parse(_) => "parse",
            RejectionReason::NoMatch(_) => "no_match",
        }
    }

    /// Last stage the candidate reached before being rejected
    pub fn stage(&self) -> CandidateStage {
        match self {
            RejectionReason::Shape(e) if e.is_structural() => CandidateStage::Pending,
            RejectionReason::Shape(_) => CandidateStage::Solved,
            RejectionReason::Upstream(_) | RejectionReason::Parse(_) => CandidateStage::Pending,
            RejectionReason::NoMatch(_) => CandidateStage::Normalized,
        }
    }
}

/// A dropped candidate with its reason and original position
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub position: usize,
    pub reason: RejectionReason,
    pub candidate: QuestionCandidate,
}

impl Rejection {
    pub fn new(position: usize, reason: impl Into<RejectionReason>, candidate: QuestionCandidate) -> Self {
        Self {
            position,
            reason: reason.into(),
            candidate,
        }
    }

    pub fn stage(&self) -> CandidateStage {
        self.reason.stage()
    }
}
