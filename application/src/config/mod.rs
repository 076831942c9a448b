//! Application-level configuration.
//!
//! - [`DelegateCredential`]: request-scoped API key for the delegate

pub mod credential;

pub use credential::DelegateCredential;
