//! Infrastructure layer for quizcheck
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileDelegateConfig, FileDiagnosticsConfig,
    FileServerConfig, Severity,
};
pub use logging::JsonlDiagnosticSink;
pub use openai::{ConfiguredCredentialSource, OpenAiGateway};
