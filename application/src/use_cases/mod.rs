//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod check_answer;
pub mod generate_questions;
pub mod validate_batch;
