//! Gateway-backed implementations of the solver and generator ports.

pub mod llm_delegate;

pub use llm_delegate::LlmDelegate;
