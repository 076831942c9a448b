//! Delegate access credential.

use crate::error::ServiceError;

/// API key used to reach the delegate.
///
/// Resolved once at the start of each request and handed to the
/// request-scoped delegate; never read from ambient state afterwards.
/// `Debug` output is masked.
#[derive(Clone, PartialEq, Eq)]
pub struct DelegateCredential(String);

impl DelegateCredential {
    /// Resolve a configured key, treating absent or blank keys as a
    /// configuration error.
    pub fn resolve(configured: Option<&str>) -> Result<Self, ServiceError> {
        match configured.map(str::trim) {
            Some(key) if !key.is_empty() => Ok(Self(key.to_string())),
            _ => Err(ServiceError::Configuration(
                "delegate API key is not configured".to_string(),
            )),
        }
    }

    /// The raw secret, for building the authorization header
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Masked form for logs: first and last four characters
    pub fn masked(&self) -> String {
        if self.0.len() <= 8 || !self.0.is_ascii() {
            "*".repeat(self.0.chars().count())
        } else {
            format!("{}...{}", &self.0[..4], &self.0[self.0.len() - 4..])
        }
    }
}

impl std::fmt::Debug for DelegateCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DelegateCredential")
            .field(&self.masked())
            .finish()
    }
}
