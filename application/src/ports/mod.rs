//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod credential_source;
pub mod diagnostics;
pub mod llm_gateway;
pub mod question_generator;
pub mod solver;
