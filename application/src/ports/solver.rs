//! Solver delegate port
//!
//! The delegate has two explicit capabilities, selected by subject domain:
//!
//! - [`SolverDelegate::solve_blind`] sees only the prompt, so its reasoning is
//!   not anchored toward any of the offered choices
//! - [`SolverDelegate::solve_with_choices`] sees the choices (and the user's
//!   pick, for interactive checks) and selects one directly

use crate::ports::llm_gateway::GatewayError;
use async_trait::async_trait;
use quizcheck_domain::{ChoiceIndex, ChoiceSelection, NumericSolution, ResponseParseError};
use thiserror::Error;

/// A failed delegate call. Never replaced by a default result.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Parse(#[from] ResponseParseError),
}

/// Input for a choice-aware solve
#[derive(Debug, Clone, Copy)]
pub struct ChoiceAwareRequest<'a> {
    pub prompt: &'a str,
    pub choices: &'a [String],
    pub passage: Option<&'a str>,
    /// The user's selection, for interactive checks
    pub selected: Option<ChoiceIndex>,
}

/// The reasoning capability supplying ground-truth answers
#[async_trait]
pub trait SolverDelegate: Send + Sync {
    /// Compute a numeric answer from the prompt alone
    async fn solve_blind(&self, prompt: &str) -> Result<NumericSolution, SolveError>;

    /// Select the correct choice with the choices in view
    async fn solve_with_choices(
        &self,
        request: ChoiceAwareRequest<'_>,
    ) -> Result<ChoiceSelection, SolveError>;
}
