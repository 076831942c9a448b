//! Shared handler state

use quizcheck_application::{
    CredentialSource, DiagnosticSink, LlmDelegate, LlmGateway, NoDiagnostics, ServiceError,
};
use std::sync::Arc;

/// Application state shared across handlers
///
/// Only immutable collaborators live here. The delegate, together with its
/// credential, is built fresh for every request by [`AppState::delegate`].
pub struct AppState {
    gateway: Arc<dyn LlmGateway>,
    credentials: Arc<dyn CredentialSource>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn LlmGateway>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            gateway,
            credentials,
            diagnostics: Arc::new(NoDiagnostics),
        }
    }

    /// Send batch rejections to `diagnostics`
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Resolve the credential and build this request's delegate
    pub fn delegate(&self) -> Result<Arc<LlmDelegate>, ServiceError> {
        let credential = self.credentials.credential()?;
        Ok(Arc::new(LlmDelegate::new(
            Arc::clone(&self.gateway),
            credential,
        )))
    }

    pub fn diagnostics(&self) -> Arc<dyn DiagnosticSink> {
        Arc::clone(&self.diagnostics)
    }
}
