//! Presentation layer for quizcheck
//!
//! This crate contains CLI definitions and the HTTP surface:
//! request/response DTOs, routes, and error-to-status mapping.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{AppState, router, serve};
