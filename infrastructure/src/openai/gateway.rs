//! OpenAI-compatible LLM Gateway implementation

use super::types::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};
use crate::config::FileDelegateConfig;
use async_trait::async_trait;
use quizcheck_application::config::DelegateCredential;
use quizcheck_application::ports::llm_gateway::{GatewayError, LlmGateway};
use quizcheck_domain::preview;
use std::time::Duration;
use tracing::{debug, warn};

/// Longest error body kept in a [`GatewayError::Status`].
const MAX_ERROR_BODY: usize = 500;

/// LLM Gateway over the `/chat/completions` endpoint
///
/// Holds connection settings only; the API key arrives with each call.
/// Every call is a single attempt with no retries.
pub struct OpenAiGateway {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiGateway {
    /// Build a gateway from the `[delegate]` config section
    pub fn new(config: &FileDelegateConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Full URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(
        &self,
        credential: &DelegateCredential,
        system_prompt: &str,
        task: &str,
    ) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage::system(system_prompt), ChatMessage::user(task)],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            response_format: ResponseFormat::json_object(),
        };

        debug!(
            model = %self.model,
            key = %credential.masked(),
            task_bytes = task.len(),
            "Sending delegate request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Delegate returned an error status");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: preview(&body, MAX_ERROR_BODY),
            });
        }

        let body = response.text().await.map_err(map_send_error)?;
        let envelope: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            GatewayError::InvalidResponse(format!("{e}: {}", preview(&body, MAX_ERROR_BODY)))
        })?;

        let content = envelope.into_content().ok_or(GatewayError::EmptyResponse)?;
        debug!(reply_bytes = content.len(), "Delegate replied");
        Ok(content)
    }
}

fn map_send_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(error.to_string())
    }
}
