//! Request and response bodies

use quizcheck_application::{CheckAnswerInput, GenerateQuestionsInput};
use quizcheck_domain::{BatchSize, Subject, ValidatedQuestion};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `POST /api/questions` body
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub subject: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub difficulty: String,
    /// Loosely typed on purpose: numbers, numeric strings and junk are all
    /// coerced by [`BatchSize::from_request`].
    #[serde(default)]
    pub count: Option<Value>,
}

impl GenerateRequest {
    pub fn into_input(self) -> GenerateQuestionsInput {
        let count = BatchSize::from_request(self.count.as_ref());
        GenerateQuestionsInput::new(
            Subject::new(self.subject),
            self.topic,
            self.difficulty,
            count,
        )
    }
}

/// `POST /api/questions` response
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub questions: Vec<ValidatedQuestion>,
}

/// `POST /api/check` body
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRequest {
    pub subject: String,
    pub question: CheckQuestion,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckQuestion {
    pub prompt: String,
    #[serde(default)]
    pub choices: Vec<String>,
    pub user_index: i64,
    #[serde(default)]
    pub passage: Option<String>,
}

impl CheckRequest {
    pub fn into_input(self) -> CheckAnswerInput {
        let question = self.question;
        let input = CheckAnswerInput::new(
            Subject::new(self.subject),
            question.prompt,
            question.choices,
            question.user_index,
        );
        match question.passage {
            Some(passage) => input.with_passage(passage),
            None => input,
        }
    }
}

/// `GET /health` response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizcheck_domain::SubjectDomain;
    use serde_json::json;

    #[test]
    fn test_generate_request_count_coercion() {
        let request: GenerateRequest = serde_json::from_value(json!({
            "subject": "math",
            "topic": "fractions",
            "difficulty": "easy",
            "count": "15"
        }))
        .unwrap();
        let input = request.into_input();
        assert_eq!(input.count.get(), 10);
        assert_eq!(input.subject.domain(), SubjectDomain::Numeric);

        let request: GenerateRequest =
            serde_json::from_value(json!({"subject": "reading"})).unwrap();
        let input = request.into_input();
        assert_eq!(input.count.get(), 5);
        assert!(input.topic.is_empty());
    }

    #[test]
    fn test_check_request_camel_case() {
        let request: CheckRequest = serde_json::from_value(json!({
            "subject": "reading",
            "question": {
                "prompt": "Which word is the main idea?",
                "choices": ["a", "b", "c", "d"],
                "userIndex": 2,
                "passage": "Once upon a time"
            }
        }))
        .unwrap();
        let input = request.into_input();
        assert_eq!(input.user_index, 2);
        assert_eq!(input.passage.as_deref(), Some("Once upon a time"));
        assert_eq!(input.choices.len(), 4);
    }
}
