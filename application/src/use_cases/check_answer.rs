//! Check Answer use case.
//!
//! Resolves the correct choice of a single question and compares it with the
//! user's pick. Unlike batch validation, every failure is terminal: there is
//! no meaningful partial answer to a single live check.

use crate::error::ServiceError;
use crate::ports::solver::{ChoiceAwareRequest, SolverDelegate};
use quizcheck_domain::{
    CandidateStage, ChoiceIndex, Subject, SubjectDomain, check_choice_count, match_answer,
    matching_indices, preview,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the [`CheckAnswerUseCase`].
#[derive(Debug, Clone)]
pub struct CheckAnswerInput {
    pub subject: Subject,
    pub prompt: String,
    pub choices: Vec<String>,
    pub passage: Option<String>,
    /// Raw index submitted by the user; validated against `0..=3`.
    pub user_index: i64,
}

impl CheckAnswerInput {
    pub fn new(
        subject: Subject,
        prompt: impl Into<String>,
        choices: Vec<String>,
        user_index: i64,
    ) -> Self {
        Self {
            subject,
            prompt: prompt.into(),
            choices,
            passage: None,
            user_index,
        }
    }

    pub fn with_passage(mut self, passage: impl Into<String>) -> Self {
        self.passage = Some(passage.into());
        self
    }
}

/// Verdict for one user answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAnswerOutput {
    pub correct_index: ChoiceIndex,
    pub is_correct: bool,
    pub solution: String,
}

/// Use case for checking a single user answer.
///
/// - Numeric subjects: blind solve, then match the number against the choices
/// - Other subjects: choice-aware solve with the user's letter
#[derive(Clone)]
pub struct CheckAnswerUseCase {
    solver: Arc<dyn SolverDelegate>,
}

impl CheckAnswerUseCase {
    pub fn new(solver: Arc<dyn SolverDelegate>) -> Self {
        Self { solver }
    }

    pub async fn execute(&self, input: CheckAnswerInput) -> Result<CheckAnswerOutput, ServiceError> {
        check_choice_count(&input.choices)?;
        let user_index = ChoiceIndex::try_from(input.user_index)?;

        info!(
            subject = %input.subject,
            prompt = %preview(&input.prompt, 80),
            user_index = %user_index,
            "Checking answer"
        );

        let (correct_index, solution) = match input.subject.domain() {
            SubjectDomain::Numeric => self.resolve_numeric(&input).await?,
            SubjectDomain::ChoiceAware => self.resolve_choice_aware(&input, user_index).await?,
        };

        let is_correct = user_index == correct_index;
        debug!(stage = %CandidateStage::Validated, %correct_index, is_correct, "Answer checked");

        Ok(CheckAnswerOutput {
            correct_index,
            is_correct,
            solution,
        })
    }

    async fn resolve_numeric(
        &self,
        input: &CheckAnswerInput,
    ) -> Result<(ChoiceIndex, String), ServiceError> {
        let solved = self.solver.solve_blind(&input.prompt).await?;
        let index = match_answer(solved.final_answer, &input.choices)?;
        let all = matching_indices(solved.final_answer, &input.choices);
        if all.len() > 1 {
            warn!(
                final_answer = solved.final_answer,
                matches = ?all.iter().map(|i| i.get()).collect::<Vec<_>>(),
                "Several choices are numerically equal to the answer; taking the first"
            );
        }
        Ok((index, solved.solution))
    }

    async fn resolve_choice_aware(
        &self,
        input: &CheckAnswerInput,
        user_index: ChoiceIndex,
    ) -> Result<(ChoiceIndex, String), ServiceError> {
        let selection = self
            .solver
            .solve_with_choices(ChoiceAwareRequest {
                prompt: &input.prompt,
                choices: &input.choices,
                passage: input.passage.as_deref(),
                selected: Some(user_index),
            })
            .await?;

        // The verdict is recomputed from the indices; the delegate's own flag
        // is only compared for diagnostics.
        if selection.is_correct != (selection.correct_index == user_index) {
            warn!(
                correct_index = %selection.correct_index,
                user_index = %user_index,
                delegate_is_correct = selection.is_correct,
                "Delegate verdict disagrees with its selected index"
            );
        }
        Ok((selection.correct_index, selection.solution))
    }
}
