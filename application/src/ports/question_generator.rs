//! Question generator port

use crate::ports::solver::SolveError;
use async_trait::async_trait;
use quizcheck_domain::{BatchSize, GeneratedBatch, Subject};

/// What to generate
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub subject: Subject,
    pub topic: String,
    pub difficulty: String,
    pub count: BatchSize,
}

/// Produces unvalidated question candidates (the top-level generation call)
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedBatch, SolveError>;
}
