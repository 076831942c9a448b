//! Credential source port
//!
//! Supplies the delegate API key at the start of each request. The
//! application turns the raw value into a [`DelegateCredential`] and hands
//! it to the request-scoped delegate.

use crate::config::DelegateCredential;
use crate::error::ServiceError;

/// Where the delegate API key comes from
pub trait CredentialSource: Send + Sync {
    /// The configured key, if any
    fn api_key(&self) -> Option<String>;

    /// Resolve the key for one request
    fn credential(&self) -> Result<DelegateCredential, ServiceError> {
        DelegateCredential::resolve(self.api_key().as_deref())
    }
}

/// A key fixed at construction (tests, `--api-key` style wiring)
pub struct StaticCredential(pub Option<String>);

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}
