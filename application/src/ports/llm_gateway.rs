//! LLM Gateway port
//!
//! Defines the interface for sending a task description to the delegate and
//! getting its raw reply back.

use crate::config::DelegateCredential;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Delegate returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Timeout")]
    Timeout,

    #[error("Malformed delegate response: {0}")]
    InvalidResponse(String),

    #[error("Delegate returned an empty reply")]
    EmptyResponse,
}

impl GatewayError {
    /// Transport-level failure (as opposed to a reply that arrived but is unusable)
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            GatewayError::ConnectionError(_) | GatewayError::Status { .. } | GatewayError::Timeout
        )
    }
}

/// Gateway for delegate communication
///
/// This port defines how the application layer talks to the reasoning
/// capability. Implementations (adapters) live in the infrastructure layer.
/// The credential is passed on every call so adapters hold no secrets.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send one task and return the reply text
    async fn complete(
        &self,
        credential: &DelegateCredential,
        system_prompt: &str,
        task: &str,
    ) -> Result<String, GatewayError>;
}
