//! Credential source backed by the `[delegate]` config section

use crate::config::FileDelegateConfig;
use quizcheck_application::ports::credential_source::CredentialSource;

/// Reads the API key from config, falling back to the named env var
///
/// The lookup runs on every request, so the key is never cached in the
/// gateway or the server state.
pub struct ConfiguredCredentialSource {
    config: FileDelegateConfig,
}

impl ConfiguredCredentialSource {
    pub fn new(config: FileDelegateConfig) -> Self {
        Self { config }
    }
}

impl CredentialSource for ConfiguredCredentialSource {
    fn api_key(&self) -> Option<String> {
        self.config.resolve_api_key()
    }
}
