//! Results returned by the solving delegate

use crate::choice::index::ChoiceIndex;
use crate::question::candidate::QuestionCandidate;

/// Blind numeric solve result: a raw number and its derivation
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSolution {
    pub final_answer: f64,
    pub solution: String,
}

/// Choice-aware solve result: a selected choice and its derivation
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceSelection {
    pub correct_index: ChoiceIndex,
    /// The delegate's own verdict on the user's selection, if one was given
    pub is_correct: bool,
    pub solution: String,
}

/// Candidates returned by the generation call
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratedBatch {
    pub questions: Vec<QuestionCandidate>,
}
