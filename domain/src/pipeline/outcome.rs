//! Accumulating per-candidate results into a batch result

use super::rejection::Rejection;
use crate::question::validated::ValidatedQuestion;

/// Result of processing one candidate
pub type CandidateOutcome = Result<ValidatedQuestion, Rejection>;

/// Survivors and diagnostics of one batch, both in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub validated: Vec<ValidatedQuestion>,
    pub rejected: Vec<Rejection>,
}

impl BatchOutcome {
    /// Fold step: append one candidate's outcome
    pub fn record(mut self, outcome: CandidateOutcome) -> Self {
        match outcome {
            Ok(question) => self.validated.push(question),
            Err(rejection) => self.rejected.push(rejection),
        }
        self
    }
}
