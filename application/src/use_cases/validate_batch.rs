//! Validate Batch use case.
//!
//! Filters generated candidates down to questions with a confirmed answer.
//! Per-item failures drop only that item; the batch as a whole never fails.

use crate::ports::diagnostics::{DiagnosticSink, NoDiagnostics};
use crate::ports::solver::{SolveError, SolverDelegate};
use futures::stream::{self, StreamExt};
use quizcheck_domain::{
    BatchOutcome, CandidateOutcome, ChoiceIndex, QuestionCandidate, Rejection, RejectionReason,
    ResponseParseError, Subject, SubjectDomain, ValidatedQuestion, match_answer, matching_indices,
    preview,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Input for the [`ValidateBatchUseCase`].
#[derive(Debug, Clone)]
pub struct ValidateBatchInput {
    /// Subject of the whole batch; selects the solving strategy.
    pub subject: Subject,
    /// Candidates in generation order.
    pub candidates: Vec<QuestionCandidate>,
}

impl ValidateBatchInput {
    pub fn new(subject: Subject, candidates: Vec<QuestionCandidate>) -> Self {
        Self {
            subject,
            candidates,
        }
    }
}

/// Use case for validating a batch of candidates.
///
/// For each candidate, strictly one after another:
/// 1. Structural check (exactly 4 choices), before any delegate call
/// 2. Numeric subjects: blind solve, then match the number against the choices
/// 3. Choice-aware subjects: validate the index declared by generation
/// 4. Promote to [`ValidatedQuestion`]
///
/// The per-item results are folded into a [`BatchOutcome`]; rejections are
/// then logged and forwarded to the [`DiagnosticSink`].
#[derive(Clone)]
pub struct ValidateBatchUseCase {
    solver: Arc<dyn SolverDelegate>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl ValidateBatchUseCase {
    pub fn new(solver: Arc<dyn SolverDelegate>) -> Self {
        Self {
            solver,
            diagnostics: Arc::new(NoDiagnostics),
        }
    }

    /// Create with a diagnostics sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Validate every candidate and split the results.
    pub async fn execute(&self, input: ValidateBatchInput) -> BatchOutcome {
        let subject = &input.subject;
        let submitted = input.candidates.len();

        let outcome = stream::iter(input.candidates.into_iter().enumerate())
            .then(|(position, candidate)| self.validate_candidate(subject, position, candidate))
            .fold(BatchOutcome::default(), |acc, outcome| async move {
                acc.record(outcome)
            })
            .await;

        for rejection in &outcome.rejected {
            warn!(
                subject = %subject,
                position = rejection.position,
                reason = rejection.reason.code(),
                stage = %rejection.stage(),
                prompt = %preview(&rejection.candidate.prompt, 80),
                "Dropped candidate: {}",
                rejection.reason
            );
            self.diagnostics.record(subject, rejection);
        }

        info!(
            subject = %subject,
            submitted,
            validated = outcome.validated.len(),
            rejected = outcome.rejected.len(),
            "Batch validation finished"
        );
        outcome
    }

    async fn validate_candidate(
        &self,
        subject: &Subject,
        position: usize,
        candidate: QuestionCandidate,
    ) -> CandidateOutcome {
        let resolved = match candidate.check_shape() {
            Err(e) => Err(RejectionReason::from(e)),
            Ok(()) => match subject.domain() {
                SubjectDomain::Numeric => self.resolve_numeric(position, &candidate).await,
                SubjectDomain::ChoiceAware => resolve_declared(&candidate),
            },
        };

        match resolved {
            Ok((index, solution)) => ValidatedQuestion::promote(candidate, index, solution)
                .map_err(|(e, candidate)| Rejection::new(position, e, *candidate)),
            Err(reason) => Err(Rejection::new(position, reason, candidate)),
        }
    }

    async fn resolve_numeric(
        &self,
        position: usize,
        candidate: &QuestionCandidate,
    ) -> Result<(ChoiceIndex, String), RejectionReason> {
        let solved = self
            .solver
            .solve_blind(&candidate.prompt)
            .await
            .map_err(rejection_reason)?;

        let index = match_answer(solved.final_answer, &candidate.choices)?;
        let all = matching_indices(solved.final_answer, &candidate.choices);
        if all.len() > 1 {
            warn!(
                position,
                final_answer = solved.final_answer,
                matches = ?all.iter().map(|i| i.get()).collect::<Vec<_>>(),
                "Several choices are numerically equal to the answer; taking the first"
            );
        }
        Ok((index, solved.solution))
    }
}

/// Choice-aware batches carry the answer declared by generation.
fn resolve_declared(
    candidate: &QuestionCandidate,
) -> Result<(ChoiceIndex, String), RejectionReason> {
    let index = candidate.declared_index()?;
    Ok((index, candidate.solution.clone().unwrap_or_default()))
}

fn rejection_reason(error: SolveError) -> RejectionReason {
    match error {
        SolveError::Gateway(e) if e.is_upstream() => RejectionReason::Upstream(e.to_string()),
        SolveError::Gateway(e) => {
            RejectionReason::Parse(ResponseParseError::Unreadable(e.to_string()))
        }
        SolveError::Parse(e) => RejectionReason::Parse(e),
    }
}
