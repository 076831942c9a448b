//! Question candidate entity

use crate::choice::index::{CHOICE_COUNT, ChoiceIndex};
use crate::core::error::ShapeError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An unvalidated generated question (Entity)
///
/// Produced by generation and consumed exactly once by the validation
/// pipeline. `correct_index` and `solution` are only meaningful for
/// choice-aware subjects, where generation declares the answer itself;
/// the index is kept as raw JSON until [`QuestionCandidate::declared_index`]
/// validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCandidate {
    #[serde(default)]
    pub prompt: String,
    #[serde(default, deserialize_with = "choice_texts")]
    pub choices: Vec<String>,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_index: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    /// Why the generated entry could not be read as a question, if it couldn't
    #[serde(skip)]
    pub malformed: Option<String>,
}

impl QuestionCandidate {
    pub fn new(prompt: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            choices,
            topic: String::new(),
            difficulty: String::new(),
            passage: None,
            correct_index: None,
            solution: None,
            malformed: None,
        }
    }

    /// Read one entry of a generated batch.
    ///
    /// Never fails: an entry that does not deserialize becomes a candidate
    /// carrying the error, which [`QuestionCandidate::check_shape`] rejects.
    /// The prompt is kept when it is readable so diagnostics can name it.
    pub fn from_generated(entry: &Value) -> Self {
        match Self::deserialize(entry) {
            Ok(candidate) => candidate,
            Err(e) => {
                let prompt = entry
                    .get("prompt")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let mut candidate = Self::new(prompt, Vec::new());
                candidate.malformed = Some(e.to_string());
                candidate
            }
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>, difficulty: impl Into<String>) -> Self {
        self.topic = topic.into();
        self.difficulty = difficulty.into();
        self
    }

    pub fn with_passage(mut self, passage: impl Into<String>) -> Self {
        self.passage = Some(passage.into());
        self
    }

    /// Attach the answer declared by generation
    pub fn with_declared_answer(mut self, index: Value, solution: impl Into<String>) -> Self {
        self.correct_index = Some(index);
        self.solution = Some(solution.into());
        self
    }

    /// Structural check performed before any delegate call
    pub fn check_shape(&self) -> Result<(), ShapeError> {
        if let Some(reason) = &self.malformed {
            return Err(ShapeError::Malformed(reason.clone()));
        }
        check_choice_count(&self.choices)?;
        if self.prompt.trim().is_empty() {
            return Err(ShapeError::EmptyPrompt);
        }
        Ok(())
    }

    /// Validate the generation-declared index
    pub fn declared_index(&self) -> Result<ChoiceIndex, ShapeError> {
        match &self.correct_index {
            None | Some(Value::Null) => Err(ShapeError::MissingIndex),
            Some(value) => ChoiceIndex::from_json(value),
        }
    }
}

/// Require exactly [`CHOICE_COUNT`] choices
pub fn check_choice_count<S>(choices: &[S]) -> Result<(), ShapeError> {
    if choices.len() == CHOICE_COUNT {
        Ok(())
    } else {
        Err(ShapeError::WrongChoiceCount {
            expected: CHOICE_COUNT,
            actual: choices.len(),
        })
    }
}

/// Accept numbers as choice text; generation sometimes emits `[1, 2, 3, 4]`.
fn choice_texts<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .map(|value| match value {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "choice must be a string or number, got {other}"
            ))),
        })
        .collect()
}
