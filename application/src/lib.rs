//! Application layer for quizcheck
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod delegate;
pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DelegateCredential;
pub use delegate::LlmDelegate;
pub use error::ServiceError;
pub use ports::{
    credential_source::{CredentialSource, StaticCredential},
    diagnostics::{DiagnosticSink, NoDiagnostics},
    llm_gateway::{GatewayError, LlmGateway},
    question_generator::{GenerationRequest, QuestionGenerator},
    solver::{ChoiceAwareRequest, SolveError, SolverDelegate},
};
pub use use_cases::check_answer::{CheckAnswerInput, CheckAnswerOutput, CheckAnswerUseCase};
pub use use_cases::generate_questions::{GenerateQuestionsInput, GenerateQuestionsUseCase};
pub use use_cases::validate_batch::{ValidateBatchInput, ValidateBatchUseCase};
