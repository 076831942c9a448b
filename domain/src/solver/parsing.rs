//! Strict JSON parsing of delegate replies.
//!
//! Every reply must be a single JSON object in one of three shapes:
//!
//! | Shape | Fields |
//! |-------|--------|
//! | Generated batch | `questions: [...]` |
//! | Numeric solution | `finalAnswer: number \| numeric string`, `solution: string` |
//! | Choice selection | `correctIndex: integer`, `isCorrect: bool`, `solution: string` |
//!
//! Anything else is a [`ResponseParseError`]. Nothing is defaulted: a reply
//! missing a field fails even if the rest of it is usable.

use super::result::{ChoiceSelection, GeneratedBatch, NumericSolution};
use crate::choice::index::ChoiceIndex;
use crate::choice::normalizer::normalize_choice;
use crate::core::error::ShapeError;
use crate::core::string::preview;
use crate::question::candidate::QuestionCandidate;
use serde_json::{Map, Value};
use thiserror::Error;

/// A delegate reply that does not have the expected shape
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResponseParseError {
    #[error("Reply is not valid JSON: {error} (reply: {raw})")]
    NotJson { error: String, raw: String },

    #[error("Reply is not a JSON object (reply: {0})")]
    NotAnObject(String),

    #[error("Reply is missing field '{0}'")]
    MissingField(&'static str),

    #[error("Field '{field}' should be {expected}, got {actual}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error("Field 'finalAnswer' is not a finite number: {0}")]
    NonNumericAnswer(String),

    #[error("Reply selected an invalid choice: {0}")]
    InvalidSelection(#[from] ShapeError),

    #[error("Reply could not be read: {0}")]
    Unreadable(String),
}

const RAW_PREVIEW_LEN: usize = 200;

fn parse_object(text: &str) -> Result<Map<String, Value>, ResponseParseError> {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ResponseParseError::NotAnObject(preview(text, RAW_PREVIEW_LEN))),
        Err(e) => Err(ResponseParseError::NotJson {
            error: e.to_string(),
            raw: preview(text, RAW_PREVIEW_LEN),
        }),
    }
}

fn required<'a>(
    map: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, ResponseParseError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ResponseParseError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn required_string(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ResponseParseError> {
    match required(map, field)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(ResponseParseError::WrongType {
            field,
            expected: "a string",
            actual: other.to_string(),
        }),
    }
}

/// Parse a `{"finalAnswer": ..., "solution": ...}` reply
pub fn parse_numeric_solution(text: &str) -> Result<NumericSolution, ResponseParseError> {
    let map = parse_object(text)?;
    let final_answer = match required(&map, "finalAnswer")? {
        Value::Number(n) => n
            .as_f64()
            .filter(|f| f.is_finite())
            .ok_or_else(|| ResponseParseError::NonNumericAnswer(n.to_string()))?,
        Value::String(s) => {
            normalize_choice(s).map_err(|_| ResponseParseError::NonNumericAnswer(s.clone()))?
        }
        other => {
            return Err(ResponseParseError::WrongType {
                field: "finalAnswer",
                expected: "a number or numeric string",
                actual: other.to_string(),
            });
        }
    };
    let solution = required_string(&map, "solution")?;
    Ok(NumericSolution {
        final_answer,
        solution,
    })
}

/// Parse a `{"correctIndex": ..., "isCorrect": ..., "solution": ...}` reply
pub fn parse_choice_selection(text: &str) -> Result<ChoiceSelection, ResponseParseError> {
    let map = parse_object(text)?;
    let index_value = required(&map, "correctIndex")?;
    let raw_index = index_value
        .as_i64()
        .ok_or_else(|| ResponseParseError::WrongType {
            field: "correctIndex",
            expected: "an integer",
            actual: index_value.to_string(),
        })?;
    let correct_index = ChoiceIndex::try_from(raw_index)?;
    let is_correct = match required(&map, "isCorrect")? {
        Value::Bool(b) => *b,
        other => {
            return Err(ResponseParseError::WrongType {
                field: "isCorrect",
                expected: "a boolean",
                actual: other.to_string(),
            });
        }
    };
    let solution = required_string(&map, "solution")?;
    Ok(ChoiceSelection {
        correct_index,
        is_correct,
        solution,
    })
}

/// Parse a `{"questions": [...]}` reply
///
/// Only a non-object reply or a missing `questions` array fails the batch.
/// Per-entry problems (unreadable entry, blank prompt, wrong choice count, bad
/// declared index) are left to the validation pipeline, where they drop only
/// that entry.
pub fn parse_generated_batch(text: &str) -> Result<GeneratedBatch, ResponseParseError> {
    let map = parse_object(text)?;
    let questions = match required(&map, "questions")? {
        Value::Array(items) => items,
        other => {
            return Err(ResponseParseError::WrongType {
                field: "questions",
                expected: "an array",
                actual: preview(&other.to_string(), RAW_PREVIEW_LEN),
            });
        }
    };
    let questions = questions
        .iter()
        .map(QuestionCandidate::from_generated)
        .collect();
    Ok(GeneratedBatch { questions })
}
