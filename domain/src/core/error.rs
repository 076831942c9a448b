//! Domain error types

use thiserror::Error;

/// Structural problems with a question or a declared index
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Expected {expected} choices, found {actual}")]
    WrongChoiceCount { expected: usize, actual: usize },

    #[error("Choice index {0} is outside 0..=3")]
    IndexOutOfRange(i64),

    #[error("Choice index is not an integer: {0}")]
    NonIntegerIndex(String),

    #[error("No correct index declared")]
    MissingIndex,

    #[error("Question prompt is empty")]
    EmptyPrompt,

    #[error("Unreadable question entry: {0}")]
    Malformed(String),
}

impl ShapeError {
    /// Detected from the question alone, before any delegate call
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ShapeError::WrongChoiceCount { .. }
                | ShapeError::EmptyPrompt
                | ShapeError::Malformed(_)
        )
    }
}
