//! Validated question entity

use super::candidate::{QuestionCandidate, check_choice_count};
use crate::choice::index::ChoiceIndex;
use crate::core::error::ShapeError;
use serde::{Deserialize, Serialize};

/// A candidate that passed solve and match, carrying a confirmed answer
///
/// `correct_index` always indexes an existing choice and `correct_answer`
/// is that choice verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedQuestion {
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_index: ChoiceIndex,
    pub correct_answer: String,
    pub topic: String,
    pub difficulty: String,
    pub solution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage: Option<String>,
}

impl ValidatedQuestion {
    /// Promote a candidate once its correct index is known
    ///
    /// On a shape error the candidate is handed back so the caller can
    /// record it as rejected.
    pub fn promote(
        candidate: QuestionCandidate,
        correct_index: ChoiceIndex,
        solution: impl Into<String>,
    ) -> Result<Self, (ShapeError, Box<QuestionCandidate>)> {
        if let Err(e) = check_choice_count(&candidate.choices) {
            return Err((e, Box::new(candidate)));
        }
        let correct_answer = candidate.choices[correct_index.get()].clone();
        Ok(Self {
            prompt: candidate.prompt,
            choices: candidate.choices,
            correct_index,
            correct_answer,
            topic: candidate.topic,
            difficulty: candidate.difficulty,
            solution: solution.into(),
            passage: candidate.passage,
        })
    }
}
