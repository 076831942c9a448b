//! OpenAI-compatible delegate adapter
//!
//! Implements the [`LlmGateway`](quizcheck_application::LlmGateway) port over
//! HTTP chat completions in JSON mode, plus the config-backed credential
//! source.

mod credential;
mod gateway;
mod types;

pub use credential::ConfiguredCredentialSource;
pub use gateway::OpenAiGateway;
