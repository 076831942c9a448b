//! Generate Questions use case.
//!
//! Backs the batch endpoint: one generation call, then batch validation.
//! Errors from the generation call fail the whole request; per-question
//! failures only shorten the returned list.

use crate::error::ServiceError;
use crate::ports::question_generator::{GenerationRequest, QuestionGenerator};
use crate::use_cases::validate_batch::{ValidateBatchInput, ValidateBatchUseCase};
use quizcheck_domain::{BatchSize, Subject, ValidatedQuestion};
use std::sync::Arc;
use tracing::{info, warn};

/// Input for the [`GenerateQuestionsUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateQuestionsInput {
    pub subject: Subject,
    pub topic: String,
    pub difficulty: String,
    pub count: BatchSize,
}

impl GenerateQuestionsInput {
    pub fn new(
        subject: Subject,
        topic: impl Into<String>,
        difficulty: impl Into<String>,
        count: BatchSize,
    ) -> Self {
        Self {
            subject,
            topic: topic.into(),
            difficulty: difficulty.into(),
            count,
        }
    }
}

/// Use case for generating a batch of validated questions.
pub struct GenerateQuestionsUseCase {
    generator: Arc<dyn QuestionGenerator>,
    validator: ValidateBatchUseCase,
}

impl GenerateQuestionsUseCase {
    pub fn new(generator: Arc<dyn QuestionGenerator>, validator: ValidateBatchUseCase) -> Self {
        Self {
            generator,
            validator,
        }
    }

    pub async fn execute(
        &self,
        input: GenerateQuestionsInput,
    ) -> Result<Vec<ValidatedQuestion>, ServiceError> {
        info!(
            subject = %input.subject,
            topic = %input.topic,
            difficulty = %input.difficulty,
            count = input.count.get(),
            "Generating questions"
        );

        let request = GenerationRequest {
            subject: input.subject.clone(),
            topic: input.topic,
            difficulty: input.difficulty,
            count: input.count,
        };
        let mut candidates = self.generator.generate(&request).await?.questions;

        if candidates.len() > input.count.get() {
            warn!(
                generated = candidates.len(),
                requested = input.count.get(),
                "Generation returned extra candidates; discarding the surplus"
            );
            candidates.truncate(input.count.get());
        }

        let outcome = self
            .validator
            .execute(ValidateBatchInput::new(input.subject, candidates))
            .await;
        Ok(outcome.validated)
    }
}
