//! Delegate backed by an [`LlmGateway`].
//!
//! Builds the task description for each call, sends it through the gateway
//! with the request's credential, and parses the reply strictly.

use crate::config::DelegateCredential;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::question_generator::{GenerationRequest, QuestionGenerator};
use crate::ports::solver::{ChoiceAwareRequest, SolveError, SolverDelegate};
use async_trait::async_trait;
use quizcheck_domain::{
    ChoiceSelection, GeneratedBatch, NumericSolution, TaskTemplate, parse_choice_selection,
    parse_generated_batch, parse_numeric_solution, preview,
};
use std::sync::Arc;
use tracing::debug;

/// Request-scoped delegate: one per request, holding that request's credential.
#[derive(Clone)]
pub struct LlmDelegate {
    gateway: Arc<dyn LlmGateway>,
    credential: DelegateCredential,
}

impl LlmDelegate {
    pub fn new(gateway: Arc<dyn LlmGateway>, credential: DelegateCredential) -> Self {
        Self {
            gateway,
            credential,
        }
    }

    async fn send(&self, kind: &'static str, task: &str) -> Result<String, SolveError> {
        debug!(kind, task = %preview(task, 120), "Sending task to delegate");
        let reply = self
            .gateway
            .complete(&self.credential, TaskTemplate::system(), task)
            .await?;
        debug!(kind, bytes = reply.len(), "Delegate replied");
        Ok(reply)
    }
}

#[async_trait]
impl SolverDelegate for LlmDelegate {
    async fn solve_blind(&self, prompt: &str) -> Result<NumericSolution, SolveError> {
        let reply = self
            .send("blind_solve", &TaskTemplate::blind_solve(prompt))
            .await?;
        Ok(parse_numeric_solution(&reply)?)
    }

    async fn solve_with_choices(
        &self,
        request: ChoiceAwareRequest<'_>,
    ) -> Result<ChoiceSelection, SolveError> {
        let task = TaskTemplate::choice_aware_solve(
            request.prompt,
            request.choices,
            request.passage,
            request.selected,
        );
        let reply = self.send("choice_aware_solve", &task).await?;
        Ok(parse_choice_selection(&reply)?)
    }
}

#[async_trait]
impl QuestionGenerator for LlmDelegate {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedBatch, SolveError> {
        let task = TaskTemplate::generate(
            request.subject.name(),
            &request.topic,
            &request.difficulty,
            request.count.get(),
        );
        let reply = self.send("generate", &task).await?;
        Ok(parse_generated_batch(&reply)?)
    }
}
